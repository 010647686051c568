use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio and blog viewer for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Content export to display (JSON; overrides config, defaults to the bundled sample)
    #[arg(value_name = "CONTENT")]
    pub content: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Rows below the viewport top at which a section counts as active (overrides config)
    #[arg(long, global = true)]
    pub threshold: Option<u32>,

    /// Jump instead of animating when navigating to a section
    #[arg(long, global = true)]
    pub no_smooth: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the measured anchor of every section
    Sections {
        /// Terminal width to lay the page out for
        #[arg(long, default_value_t = 80)]
        width: u16,

        /// Terminal height to lay the page out for
        #[arg(long, default_value_t = 24)]
        height: u16,
    },

    /// Print the section that is active at a scroll offset
    Resolve {
        /// Scroll offset in rows
        offset: u32,

        #[arg(long, default_value_t = 80)]
        width: u16,

        #[arg(long, default_value_t = 24)]
        height: u16,
    },

    /// Print the scroll target for navigating to a section
    Goto {
        /// Section id (about, experience, projects, gallery, certificates, blog)
        section: String,

        #[arg(long, default_value_t = 80)]
        width: u16,

        #[arg(long, default_value_t = 24)]
        height: u16,
    },

    /// List posts, newest first
    Posts,

    /// List projects, newest first
    Projects,

    /// Show the metadata of a post or project
    Show {
        /// Slug of the post or project
        slug: String,
    },

    /// List every routable document
    Sitemap,

    /// Show config status and location, or create default config if missing
    InitConfig,
}

pub fn parse() -> Cli {
    Cli::parse()
}
