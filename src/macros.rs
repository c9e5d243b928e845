/// Compile a regex literal once and hand out a `&'static Regex`.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Build a [`Strategy`](crate::Strategy) from a name, optional bucket
/// requirements and a production function.
///
/// ```text
/// strategy! {
///     name: "<yyyy>年<mm>月<dd>日",
///     buckets: BucketMask::HAS_DIGITS | BucketMask::DATE_MARKERS,
///     run: kanji_full_date,
/// }
/// ```
#[macro_export]
macro_rules! strategy {
    (
        name: $name:expr
        $(, buckets: $buckets:expr)?
        , run: $run:expr
        $(,)?
    ) => {{
        $crate::Strategy {
            name: $name,
            buckets: { $crate::engine::BucketMask::empty() $(| $buckets)? },
            run: $run,
        }
    }};
}
