use clap::Parser;
use snape_core::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[derive(Parser, Debug)]
#[command(
    name = "snape",
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "Snape - A Severus Snippet Manager",
    long_about = "Snape - A Severus Snippet Manager\n\n\
                  Handle your snippets with Severus precision. Pick a snippet from \
                  ~/.snape/ and it is copied to the clipboard.",
    after_help = "Configuration:\n  \
                  Snippets directory: ~/.snape/\n\n\
                  Examples:\n  \
                  snape                                     # Show snippet selector (default size)\n  \
                  snape --verbose                           # Show snippet selector with verbose output\n  \
                  snape --width-size 300 --height-size 500  # Show with custom size"
)]
pub struct Snape {
    #[clap(long, help = "Enable verbose output messages")]
    pub verbose: bool,

    #[clap(
        long = "width-size",
        value_name = "WIDTH",
        default_value_t = DEFAULT_WIDTH,
        allow_negative_numbers = true,
        help = "Set picker width (200-600)"
    )]
    pub width_size: i64,

    #[clap(
        long = "height-size",
        value_name = "HEIGHT",
        default_value_t = DEFAULT_HEIGHT,
        allow_negative_numbers = true,
        help = "Set picker height (200-600)"
    )]
    pub height_size: i64,
}
