/// Phase of the typewriter cycle. The two pause states are entered when a
/// phrase is complete or fully erased and last for one (longer) timer delay.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TypingState {
    Typing,              // Appending characters
    PausedBeforeDelete,  // Full phrase is shown
    Deleting,            // Removing characters
    PausedAfterComplete, // Text is empty, next phrase selected
}
