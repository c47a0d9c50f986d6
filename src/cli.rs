// CLI layer: flag parsing with `clap`. The category flag is a closed
// value enum, so an invalid type is rejected here and the API client
// never sees it.

use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::fmt;

/// Command-line arguments for the one-shot creation request.
#[derive(Parser, Debug)]
#[command(name = "sammy", version, about = "Create a Sammy via the DigitalOcean Functions Challenge API")]
pub struct Cli {
    /// The name to give to your new Sammy.
    #[arg(short = 'n', long)]
    pub name: String,

    /// The type to give to your new Sammy.
    #[arg(short = 't', long = "type", value_enum, ignore_case = true)]
    pub category: Category,
}

/// The nine category tags the service accepts. Matched case-insensitively
/// on the command line, serialized as the lowercase tag on the wire.
#[derive(ValueEnum, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sammy,
    Punk,
    Dinosaur,
    Retro,
    Pizza,
    Robot,
    Pony,
    Bootcamp,
    Xray,
}

impl Category {
    /// The wire tag for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sammy => "sammy",
            Category::Punk => "punk",
            Category::Dinosaur => "dinosaur",
            Category::Retro => "retro",
            Category::Pizza => "pizza",
            Category::Robot => "robot",
            Category::Pony => "pony",
            Category::Bootcamp => "bootcamp",
            Category::Xray => "xray",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
