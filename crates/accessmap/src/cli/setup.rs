use accessmapapp::model::{Accessibility, PlaceCategory};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "accessmap",
    bin_name = "accessmap",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Browse places annotated with accessibility features", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding storage.json and accessmap.toml
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List places in a locality
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Locality id (see `accessmap localities`)
        #[arg(long, short = 'l')]
        locality: Option<String>,

        /// Show only these categories (any of them)
        #[arg(long = "category", short = 'c', value_name = "CATEGORY")]
        categories: Vec<PlaceCategory>,

        /// Require these accessibility features (all of them)
        #[arg(long = "access", short = 'a', value_name = "TAG")]
        accessibility: Vec<Accessibility>,
    },

    /// Show one place with its comments
    #[command(display_order = 2)]
    View {
        /// Place id
        place_id: String,
    },

    /// List favorite places across all localities
    #[command(display_order = 3)]
    Favorites,

    /// Add or remove a place from favorites
    #[command(display_order = 4)]
    Fav {
        /// Place id
        place_id: String,
    },

    /// List known localities
    #[command(display_order = 10)]
    Localities,

    /// List or search place categories
    #[command(display_order = 11)]
    Categories {
        /// Search by name, description or keyword
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Show every category, not only the popular ones
        #[arg(long)]
        all: bool,
    },

    /// Show or change the text scale
    #[command(display_order = 12)]
    Scale {
        #[arg(value_enum, default_value_t = ScaleArg::Show)]
        action: ScaleArg,
    },

    /// Suggest a new place for the directory
    #[command(name = "add-place", display_order = 20)]
    AddPlace(AddPlaceArgs),

    /// Rate a place
    #[command(display_order = 21)]
    Rate(RateArgs),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ScaleArg {
    Show,
    Up,
    Down,
    Reset,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum YesNo {
    Yes,
    No,
}

/// Wizard answers are passed through as text so the form's own validation
/// messages reach the user.
#[derive(clap::Args, Debug, Default)]
pub struct AddPlaceArgs {
    #[arg(long)]
    pub locality: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub website: Option<String>,

    /// Opening hours, free text
    #[arg(long)]
    pub hours: Option<String>,

    /// Accessibility feature offered (repeatable)
    #[arg(long = "access", value_name = "TAG")]
    pub accessibility: Vec<String>,

    /// Anything else about accessibility
    #[arg(long = "access-info")]
    pub access_info: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct RateArgs {
    /// Place id
    pub place_id: String,

    /// Score from 1 to 5
    #[arg(long, allow_negative_numbers = true)]
    pub stars: Option<i64>,

    #[arg(long, value_enum)]
    pub recommend: Option<YesNo>,

    /// Accessibility feature you could confirm (repeatable)
    #[arg(long = "confirm", value_name = "TAG")]
    pub confirmed: Vec<String>,

    #[arg(long)]
    pub notes: Option<String>,

    #[arg(long)]
    pub comment: Option<String>,
}
