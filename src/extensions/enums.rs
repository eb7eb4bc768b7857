use strum::IntoEnumIterator;

/// Comma separated list of every variant's string form, for error messages.
pub fn valid_csv<T>() -> String
where
    T: IntoEnumIterator + AsRef<str> + Sized,
{
    T::iter()
        .map(|v| v.as_ref().to_owned())
        .collect::<Vec<_>>()
        .join(", ")
}
