use crate::deck;

/// Prints the embedded sample deck, ready to redirect into a new file.
pub fn run() {
    print!("{}", deck::BUILTIN_DECK);
}
