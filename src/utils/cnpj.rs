//! Helpers for the 14-digit CNPJ company identifier.

use regex::Regex;
use std::sync::LazyLock;

static NON_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]").expect("static regex is valid"));

static CNPJ_GROUPS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2})([0-9]{3})([0-9]{3})([0-9]{4})([0-9]{2})$")
        .expect("static regex is valid")
});

/// Strips every character outside ASCII `0-9`.
pub fn clean_cnpj(cnpj: &str) -> String {
    NON_DIGIT.replace_all(cnpj, "").into_owned()
}

/// Formats as `XX.XXX.XXX/XXXX-XX`. Input that does not clean down to exactly
/// 14 digits is returned as given.
pub fn format_cnpj(cnpj: &str) -> String {
    let cleaned = clean_cnpj(cnpj);
    if cleaned.len() != 14 {
        return cnpj.to_string();
    }
    CNPJ_GROUPS
        .replace(&cleaned, "$1.$2.$3/$4-$5")
        .into_owned()
}
