#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Declare a [`SoundShift`](crate::SoundShift).
///
/// ```ignore
/// shift! {
///     name: "FR_V_As_U",
///     description: "...",
///     examples: ["书", "之"],
///     touches: Touches::FINAL,
///     fuzz: |p| {
///         if p.rhyme == "v" {
///             p.rhyme = "u".to_string();
///         }
///     },
/// }
/// ```
///
/// `description` and `examples` are optional. The `fuzz` body must not
/// capture anything: it becomes a plain `fn(&mut Pronunciation)`.
#[macro_export]
macro_rules! shift {
    (
        name: $name:literal,
        $(description: $desc:literal,)?
        $(examples: [ $($ex:literal),* $(,)? ],)?
        touches: $touches:expr,
        fuzz: |$p:ident| $body:block
        $(,)?
    ) => {{
        fn fuzz($p: &mut $crate::Pronunciation) $body

        $crate::SoundShift {
            name: $name,
            description: concat!("" $(, $desc)?),
            example_chars: &[ $($($ex),*)? ],
            touches: $touches,
            fuzz,
        }
    }};
}
