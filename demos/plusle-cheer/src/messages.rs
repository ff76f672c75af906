/// What the sprite says, in order. Wraps around after the last one.
pub const CHEERS: [&str; 6] = [
    "You are a good person.",
    "I believe in you.",
    "All life has value.",
    "Work hard and never give up hope.",
    "You are capable of great things.",
    "Your friends love you.",
];

/// Owned copy of the cheer list.
pub fn cheers() -> Vec<String> {
    CHEERS.iter().map(|m| m.to_string()).collect()
}
