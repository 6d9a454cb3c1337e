//! Trunk binary target; all work happens in [`bright_ethiopia::start`].

fn main() {
    #[cfg(feature = "csr")]
    bright_ethiopia::start();
}
