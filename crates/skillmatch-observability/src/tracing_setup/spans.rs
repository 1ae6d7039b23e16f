//! Span constructors for the query and indexing paths.
//!
//! Enter the returned span for the duration of the operation:
//! `let _guard = search_span!(user_id, top_n).entered();`

/// Span around an unfiltered similarity search.
#[macro_export]
macro_rules! search_span {
    ($user_id:expr, $top_n:expr) => {
        ::tracing::info_span!("search", user_id = $user_id, top_n = $top_n)
    };
}

/// Span around a tag-filtered similarity search.
#[macro_export]
macro_rules! filtered_search_span {
    ($user_id:expr, $top_n:expr, $tag_count:expr) => {
        ::tracing::info_span!(
            "filtered_search",
            user_id = $user_id,
            top_n = $top_n,
            tags = $tag_count
        )
    };
}

/// Span around an index load, build, or save.
#[macro_export]
macro_rules! index_span {
    ($op:expr, $path:expr) => {
        ::tracing::info_span!("index", op = $op, path = %$path)
    };
}

/// Span around an embedding call.
#[macro_export]
macro_rules! embedding_span {
    ($provider:expr, $count:expr) => {
        ::tracing::debug_span!("embedding", provider = %$provider, count = $count)
    };
}
