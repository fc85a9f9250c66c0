//! Macros for ergonomic state construction.

/// Build a [`State`](crate::core::State) from a literal transition table.
///
/// # Example
///
/// ```
/// use edgewise::state;
///
/// let sleep = state!("Sleep" => { "wake" => "Select" });
/// let done = state!("Done" => {}, accepting);
/// let idle = state!("Idle");
///
/// assert_eq!(sleep.target("wake"), Some("Select"));
/// assert!(done.is_accepting());
/// assert!(idle.transitions().is_empty());
/// ```
#[macro_export]
macro_rules! state {
    ($name:expr => { $($edge:expr => $target:expr),* $(,)? }, accepting) => {
        $crate::state!($name => { $($edge => $target),* }).accepting(true)
    };

    ($name:expr => { $($edge:expr => $target:expr),* $(,)? }) => {
        $crate::core::State::new($name)
            $(.with_transition($edge, $target))*
    };

    ($name:expr) => {
        $crate::core::State::new($name)
    };
}
