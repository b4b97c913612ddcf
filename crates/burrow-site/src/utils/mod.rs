//! Helpers shared by the components

/// Joins class lists, skipping empty parts
///
/// Later parts come last in the attribute, so caller-supplied classes can
/// refine the base classes of a primitive.
///
/// # Examples
///
/// ```
/// # use burrow_site::utils::class_names;
/// assert_eq!(class_names(&["p-5", "", " text-sm "]), "p-5 text-sm");
/// ```
pub fn class_names(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
