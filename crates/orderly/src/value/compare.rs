use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

///
/// TextOrder
///
/// Collation applied to `Value::Text` comparisons.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextOrder {
    /// Case- and accent-folded comparison.
    /// Ties on the folded text fall back to accents, then case (lowercase
    /// first), then bytes, so distinct strings never compare equal.
    #[default]
    CaseInsensitive,
    /// Byte-wise comparison of the UTF-8 text.
    Ordinal,
}

/// Total canonical comparator with the default text collation.
///
/// Ordering rules:
/// 1. `Null` first
/// 2. Canonical variant rank for mixed kinds
/// 3. Variant-specific comparison for same-ranked values
#[must_use]
pub fn canonical_cmp(left: &Value, right: &Value) -> Ordering {
    canonical_cmp_with(left, right, TextOrder::default())
}

/// Canonical comparator with an explicit text collation.
#[must_use]
pub fn canonical_cmp_with(left: &Value, right: &Value, text: TextOrder) -> Ordering {
    let rank = left.canonical_rank().cmp(&right.canonical_rank());
    if rank != Ordering::Equal {
        return rank;
    }

    canonical_cmp_same_rank(left, right, text)
}

fn canonical_cmp_same_rank(left: &Value, right: &Value, text: TextOrder) -> Ordering {
    #[allow(clippy::match_same_arms)]
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Int(a), Value::Int(b)) => a.cmp(b),
        (Value::Uint(a), Value::Uint(b)) => a.cmp(b),
        (Value::Int(a), Value::Uint(b)) => i128::from(*a).cmp(&i128::from(*b)),
        (Value::Uint(a), Value::Int(b)) => i128::from(*a).cmp(&i128::from(*b)),
        (Value::Float(a), Value::Float(b)) => a.total_cmp(b),
        (Value::Text(a), Value::Text(b)) => cmp_text(a, b, text),
        (Value::Date(a), Value::Date(b)) => a.cmp(b),
        (Value::Timestamp(a), Value::Timestamp(b)) => a.cmp(b),
        (Value::Null, Value::Null) => Ordering::Equal,
        _ => Ordering::Equal,
    }
}

fn cmp_text(left: &str, right: &str, text: TextOrder) -> Ordering {
    match text {
        TextOrder::CaseInsensitive => folded(left)
            .cmp(folded(right))
            .then_with(|| lowered(left).cmp(lowered(right)))
            .then_with(|| upper_flags(left).cmp(upper_flags(right)))
            .then_with(|| left.cmp(right)),
        TextOrder::Ordinal => left.cmp(right),
    }
}

fn lowered(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    lowered(s).map(fold_accent)
}

// false sorts first, so lowercase wins a case-only tie
fn upper_flags(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}

// Map lowercase Latin letters with diacritics onto their base letter.
const fn fold_accent(c: char) -> char {
    match c {
        'à'..='å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è'..='ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ì'..='ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'ķ' => 'k',
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => 'l',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'ò'..='ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => 'o',
        'ŕ' | 'ŗ' | 'ř' => 'r',
        'ś' | 'ŝ' | 'ş' | 'š' => 's',
        'ţ' | 'ť' | 'ŧ' => 't',
        'ù'..='ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        _ => c,
    }
}
