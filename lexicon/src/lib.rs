//! Letter-length tables for the two vocabularies the four-chains core needs:
//!
//! - `V[0..1000)` — length of the short-scale English cardinal spelling of a
//!   three-digit period value (e.g. `V[373] == 24`, "three hundred seventy-three").
//! - `N[0..1000)` — length of the Conway-Wechsler zillion-prefix word for a
//!   period value used as a zillion index, excluding the trailing "on" and
//!   the leading period-value word (e.g. `N[1] == 5`, from "million").
//!
//! Both tables are "given constants" from the caller's point of view: they
//! are derived once from fixed English-language rules and never change for
//! the life of the process.

use lazy_static::lazy_static;

const ONES: [&str; 10] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];
const TEENS: [&str; 10] = [
    "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen",
    "eighteen", "nineteen",
];
const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Letters in the short-scale spelling of `n`, for `n` in `[0, 1000)`.
fn cardinal_len(n: u16) -> u32 {
    if n == 0 {
        return 0;
    }
    if n < 10 {
        return ONES[n as usize].len() as u32;
    }
    if n < 20 {
        return TEENS[(n - 10) as usize].len() as u32;
    }
    if n < 100 {
        let tens_len = TENS[(n / 10) as usize].len() as u32;
        return tens_len + ONES[(n % 10) as usize].len() as u32;
    }
    let hundreds = (n / 100) as usize;
    let rest = n % 100;
    let mut len = ONES[hundreds].len() as u32 + "hundred".len() as u32;
    if rest > 0 {
        len += cardinal_len(rest);
    }
    len
}

const UNITS_PREFIX: [&str; 10] = [
    "", "un", "duo", "tre", "quattuor", "quin", "se", "septe", "octo", "novem",
];
const TENS_PREFIX: [&str; 10] = [
    "", "deci", "viginti", "triginta", "quadraginta", "quinquaginta", "sexaginta", "septuaginta",
    "octoginta", "nonaginta",
];
const HUNDREDS_PREFIX: [&str; 10] = [
    "", "centi", "ducenti", "trecenti", "quadringenti", "quingenti", "sescenti", "septingenti",
    "octingenti", "nongenti",
];

/// `million` through `nonillion`, the lexicalized (non-algorithmic) zillion
/// names for indices 1 through 9.
const SMALL_ZILLIONS: [&str; 9] = [
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
];

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Builds the Conway-Wechsler prefix (units + tens + hundreds, in that
/// order, with a single vowel-elision before "illion") for a zillion index
/// `n` in `[10, 1000)`.
///
/// This reproduces the common derived names (`decillion`, `vigintillion`,
/// `trigintillion`, `centillion`, ...) but does not implement every
/// historical Conway-Wechsler elision (e.g. "tre" -> "tres" before a
/// vowel-initial tens prefix): an explicit simplification of an out-of-scope
/// table, recorded in DESIGN.md.
fn combined_zillion_name(n: u16) -> String {
    let units = UNITS_PREFIX[(n % 10) as usize];
    let tens = TENS_PREFIX[((n / 10) % 10) as usize];
    let hundreds = HUNDREDS_PREFIX[(n / 100) as usize];
    let mut prefix = format!("{units}{tens}{hundreds}");
    if prefix.chars().last().is_some_and(is_vowel) {
        prefix.pop();
    }
    prefix.push_str("illion");
    prefix
}

/// Letters in the zillion-prefix word for index `n`, excluding the trailing
/// "on" and the leading period-value word.
fn zillion_prefix_len(n: u16) -> u32 {
    if n == 0 {
        // "thousand" is irregular: see DESIGN.md for the derivation of 5
        // from the requirement that a lone thousand-period contribute
        // exactly 8 letters via L_Z's formula.
        return 5;
    }
    if (n as usize) <= SMALL_ZILLIONS.len() {
        return SMALL_ZILLIONS[(n - 1) as usize].len() as u32 - 2;
    }
    combined_zillion_name(n).len() as u32 - 2
}

lazy_static! {
    /// `V[k]` = letters in the short-scale spelling of `k`, for `k` in `[0, 1000)`.
    pub static ref V: [u32; 1000] = {
        let mut table = [0u32; 1000];
        for (k, slot) in table.iter_mut().enumerate() {
            *slot = cardinal_len(k as u16);
        }
        table
    };

    /// `N[k]` = letters in the zillion-prefix word for index `k`, for `k` in `[0, 1000)`.
    pub static ref N: [u32; 1000] = {
        let mut table = [0u32; 1000];
        for (k, slot) in table.iter_mut().enumerate() {
            *slot = zillion_prefix_len(k as u16);
        }
        table
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn v_matches_worked_examples() {
        assert_eq!(V[0], 0);
        assert_eq!(V[1], 3);
        assert_eq!(V[3], 5);
        assert_eq!(V[6], 3);
        assert_eq!(V[11], 6);
        assert_eq!(V[13], 8);
        assert_eq!(V[15], 7);
        assert_eq!(V[17], 9);
        assert_eq!(V[23], 11);
        assert_eq!(V[24], 10);
        assert_eq!(V[73], 12);
        assert_eq!(V[123], 21);
        assert_eq!(V[173], 22);
        assert_eq!(V[323], 23);
        assert_eq!(V[373], 24);
    }

    #[test]
    fn n_thousand_is_five() {
        assert_eq!(N[0], 5);
    }

    #[test]
    fn n_small_zillions_match_dictionary_words() {
        // million=7, billion=7, trillion=8 letters, each minus "on" (2).
        assert_eq!(N[1], 5);
        assert_eq!(N[2], 5);
        assert_eq!(N[3], 6);
    }

    #[test]
    fn n_decillion_and_vigintillion() {
        // "decillion" (9 letters) minus "on" (2) = 7.
        assert_eq!(N[10], 7);
        // "vigintillion" (12 letters) minus "on" (2) = 10.
        assert_eq!(N[20], 10);
    }

    #[test]
    fn v_hundred_composition_matches_parts() {
        // V[n] for n >= 100 is ones[hundreds] + "hundred" + V[remainder].
        for n in [101u16, 212, 909, 999] {
            let hundreds = n / 100;
            let rest = n % 100;
            let expected =
                V[hundreds as usize] + "hundred".len() as u32 + if rest > 0 { V[rest as usize] } else { 0 };
            assert_eq!(V[n as usize], expected);
        }
    }
}
