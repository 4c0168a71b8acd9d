mod classify_untracked_files;
