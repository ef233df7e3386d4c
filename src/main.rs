use anyhow::Result;
use clap::Parser;

use release_note::config::{self, Config, Overrides};
use release_note::host::GithubHost;
use release_note::note::{self, ReleaseNoteGenerator};
use release_note::{actions, ui};

#[derive(clap::Parser)]
#[command(
    name = "release-note",
    about = "Generate a release note from the commits between two refs"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Repository owner (defaults to GITHUB_REPOSITORY)")]
    owner: Option<String>,

    #[arg(long, help = "Repository name (defaults to GITHUB_REPOSITORY)")]
    repo: Option<String>,

    #[arg(long, help = "Base ref, the exclusive lower bound of the range")]
    base: Option<String>,

    #[arg(long, help = "Head ref, the inclusive upper bound of the range")]
    head: Option<String>,

    #[arg(long, help = "Path the release note is written to")]
    output_path: Option<String>,

    #[arg(long, help = "API token (defaults to GITHUB_TOKEN)")]
    token: Option<String>,

    #[arg(long, help = "Print the note without writing file or output")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("release-note {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if let Err(e) = run(args) {
        // Failed status for the workflow, readable error for the terminal
        actions::set_failed(&e.to_string());
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}

fn run(args: Args) -> release_note::Result<()> {
    let file_config = config::load_file_config(args.config.as_deref())?;
    let config = Config::resolve(
        Overrides {
            owner: args.owner,
            repo: args.repo,
            base: args.base,
            head: args.head,
            output_path: args.output_path,
            token: args.token,
        },
        file_config,
    )?;

    ui::display_status(&format!(
        "Comparing {}...{} in {}/{}",
        config.base, config.head, config.owner, config.repo
    ));

    let host = GithubHost::new(config.api_url.as_str(), config.token.clone())?;
    let generator = ReleaseNoteGenerator::new(&config, &host);
    let release_note = generator.generate()?;

    ui::display_status(&format!(
        "Classified {} release note line(s)",
        release_note.lines().count()
    ));

    if args.dry_run {
        ui::display_note(&release_note);
        return Ok(());
    }

    note::write_note(&config.output_path, &release_note)?;
    ui::display_success(&format!(
        "Wrote release note to {}",
        config.output_path.display()
    ));

    if actions::set_output("release_note", &release_note)? {
        ui::display_success("Set action output 'release_note'");
    } else {
        ui::display_status("GITHUB_OUTPUT not set; skipping action output");
    }

    Ok(())
}
