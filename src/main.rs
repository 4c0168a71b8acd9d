use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::{BufRead, Write};
use wit::areas::repository::Repository;
use wit::artifacts::branch::branch_name::BranchName;
use wit::artifacts::log::LogEntry;
use wit::artifacts::objects::commit_id::CommitId;
use wit::artifacts::status::report::StatusReport;

#[derive(Parser)]
#[command(
    name = "wit",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "An in-memory version control engine",
    long_about = "This is an interactive shell around an in-memory version control engine, \
    written in Rust. The repository lives only for the duration of the session; \
    it is a learning project to understand how the git state machine works, \
    stripped of persistence.",
    no_binary_name = true,
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Shell {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "write",
        about = "Write a file into the working directory",
        long_about = "This command simulates an external edit: it writes the given content \
        to the given path in the working directory, without staging anything."
    )]
    WriteFile {
        #[arg(index = 1, help = "The file path")]
        path: String,
        #[arg(index = 2, num_args = 1.., help = "The file content")]
        content: Vec<String>,
    },
    #[command(
        name = "add",
        about = "Stage files for commit",
        long_about = "This command stages a file by literal path, or every working-directory \
        file whose path matches the given regular expression."
    )]
    Add {
        #[arg(index = 1, help = "A literal path or a regex pattern")]
        pattern: String,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command records the staged changes as a new commit on the current branch."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "branch",
        about = "Create a branch at the current commit, or list branches",
        long_about = "Without a name this command lists all branches; with a name it creates \
        a branch pointing at the current commit, without switching to it."
    )]
    Branch {
        #[arg(index = 1, help = "The branch name")]
        name: Option<String>,
    },
    #[command(
        name = "checkout",
        about = "Switch to a branch",
        long_about = "This command moves HEAD to the given branch and overwrites the working \
        directory from its tree. Uncommitted changes are discarded."
    )]
    Checkout {
        #[arg(index = 1, help = "The branch name")]
        name: String,
    },
    #[command(name = "status", about = "Show the working tree status")]
    Status,
    #[command(name = "log", about = "Show commit history, newest first")]
    Log,
    #[command(
        name = "reset",
        about = "Hard-reset the current branch to a commit",
        long_about = "This command moves the current branch to the given commit id and \
        overwrites the working directory from its tree. Uncommitted changes are discarded."
    )]
    Reset {
        #[arg(index = 1, help = "The target commit id")]
        commit: String,
    },
    #[command(name = "exit", alias = "quit", about = "Leave the shell")]
    Exit,
}

fn main() -> Result<()> {
    env_logger::init();

    let mut repository = Repository::init();
    println!(
        "wit shell - in-memory repository on branch {}",
        "main".green()
    );
    println!("Type 'help' for commands, 'exit' to leave.");

    let stdin = std::io::stdin();
    loop {
        print!("wit> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let tokens = line.split_whitespace().collect::<Vec<_>>();
        if tokens.is_empty() {
            continue;
        }
        if tokens == ["help"] {
            run(Shell::try_parse_from(["--help"]), &mut repository);
            continue;
        }

        if !run(Shell::try_parse_from(tokens), &mut repository) {
            break;
        }
    }

    Ok(())
}

/// Execute one parsed line; returns false when the session should end
fn run(parsed: Result<Shell, clap::Error>, repository: &mut Repository) -> bool {
    let shell = match parsed {
        Ok(shell) => shell,
        Err(e) => {
            let _ = e.print();
            return true;
        }
    };

    let outcome: Result<()> = match shell.command {
        Commands::WriteFile { path, content } => {
            repository.write_file(path, content.join(" "));
            Ok(())
        }
        Commands::Add { pattern } => repository.add(&pattern).map_err(Into::into),
        Commands::Commit { message } => repository
            .commit(&message)
            .map(|id| print_commit_created(repository, &id))
            .map_err(Into::into),
        Commands::Branch { name: Some(name) } => repository
            .create_branch(BranchName::from(name.as_str()))
            .map_err(Into::into),
        Commands::Branch { name: None } => {
            print_branches(repository);
            Ok(())
        }
        Commands::Checkout { name } => {
            let name = BranchName::from(name.as_str());
            repository
                .checkout(&name)
                .map(|()| eprintln!("Switched to branch '{name}'"))
                .map_err(Into::into)
        }
        Commands::Status => {
            print_status(&repository.status());
            Ok(())
        }
        Commands::Log => {
            print_log(&repository.log());
            Ok(())
        }
        Commands::Reset { commit } => {
            let id = CommitId::new(commit);
            repository
                .reset(&id)
                .map(|()| print_head_position(repository, &id))
                .map_err(Into::into)
        }
        Commands::Exit => return false,
    };

    if let Err(e) = outcome {
        eprintln!("{} {e}", "error:".red());
    }

    true
}

fn print_commit_created(repository: &Repository, id: &CommitId) {
    let head = repository.head_summary();
    let message = repository
        .database()
        .commit(id)
        .map(|commit| commit.short_message())
        .unwrap_or_default();
    let branch = head
        .branch_name()
        .map(|name| name.to_string())
        .unwrap_or_else(|| "detached".to_string());

    println!("[{branch} {}] {message}", id.to_short_id());
}

fn print_branches(repository: &Repository) {
    let current = repository.refs().head().branch_name();

    for branch in repository.branches() {
        if Some(branch.name()) == current {
            println!("* {}", branch.name().to_string().green());
        } else {
            println!("  {}", branch.name());
        }
    }
}

fn print_status(report: &StatusReport) {
    println!("{}", report.head);

    let mut clean = true;
    for file in &report.files {
        if file.is_clean() {
            continue;
        }
        clean = false;

        let code = file.porcelain_code();
        let line = format!("{code} {}", file.path);
        if file.untracked {
            println!("{}", line.red());
        } else if file.modified {
            println!("{}", line.yellow());
        } else {
            println!("{}", line.green());
        }
    }

    if clean {
        println!("nothing to commit, working tree clean");
    }
}

fn print_log(entries: &[LogEntry]) {
    for entry in entries {
        println!("{}", format!("commit {}", entry.id).yellow());
        println!(
            "Date:   {}",
            entry.timestamp.format("%a %b %-d %H:%M:%S %Y %z")
        );
        println!();
        for message_line in entry.message.lines() {
            println!("    {message_line}");
        }
        println!();
    }
}

fn print_head_position(repository: &Repository, id: &CommitId) {
    let message = repository
        .database()
        .commit(id)
        .map(|commit| commit.short_message())
        .unwrap_or_default();

    eprintln!("HEAD is now at {} {message}", id.to_short_id());
}
