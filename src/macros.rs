// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! nonempty {
    // Trimmed text, or None when nothing is left.
    ($expr:expr) => {{
        let owned = $expr;
        let t: &str = ::std::convert::AsRef::<str>::as_ref(&owned).trim();
        if t.is_empty() { None } else { Some(::std::string::String::from(t)) }
    }};
}
