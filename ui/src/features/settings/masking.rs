//! Cosmetic redaction of API keys shown in the settings form.
//!
//! Masking only changes what the input displays. The stored value is never
//! modified, so this provides no confidentiality against anyone who can read
//! component state.

/// Number of leading characters left readable in a masked key
pub const VISIBLE_PREFIX_LEN: usize = 7;

pub const MASK_CHAR: char = '*';

/// Mask an API key with the default prefix length and mask character.
///
/// `mask_api_key("sk_abcdef1234", false)` yields `"sk_abcd******"`.
pub fn mask_api_key(key: &str, visible: bool) -> String {
    mask_api_key_with(key, visible, VISIBLE_PREFIX_LEN, MASK_CHAR)
}

/// Keep the first `prefix_len` characters and replace each remaining one with
/// `mask_char`. Visible or empty keys are returned unchanged.
///
/// Works on `char`s, so the masked string always has the same character count
/// as the key.
pub fn mask_api_key_with(key: &str, visible: bool, prefix_len: usize, mask_char: char) -> String {
    if visible || key.is_empty() {
        return key.to_string();
    }

    key.chars()
        .enumerate()
        .map(|(index, c)| if index < prefix_len { c } else { mask_char })
        .collect()
}

/// Apply an edit made to a masked input back onto the real value.
///
/// `displayed` is the masked text the input showed and `edited` is what the
/// input contains after the user's change. The unchanged prefix and suffix are
/// taken from `stored`, the changed middle from `edited`. Inside a run of mask
/// characters the edit position is ambiguous and resolves to the end of the run.
pub fn reconcile_masked_edit(stored: &str, displayed: &str, edited: &str) -> String {
    let stored: Vec<char> = stored.chars().collect();
    let displayed: Vec<char> = displayed.chars().collect();
    let edited: Vec<char> = edited.chars().collect();

    // Only a length-preserving mask maps positions one to one
    if stored.len() != displayed.len() {
        return edited.into_iter().collect();
    }

    let prefix = displayed
        .iter()
        .zip(&edited)
        .take_while(|(shown, typed)| shown == typed)
        .count();
    let suffix = displayed[prefix..]
        .iter()
        .rev()
        .zip(edited[prefix..].iter().rev())
        .take_while(|(shown, typed)| shown == typed)
        .count();

    let mut reconciled = String::with_capacity(edited.len());
    reconciled.extend(&stored[..prefix]);
    reconciled.extend(&edited[prefix..edited.len() - suffix]);
    reconciled.extend(&stored[stored.len() - suffix..]);
    reconciled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_reveals_seven_character_prefix() {
        assert_eq!(mask_api_key("sk_abcdef1234", false), "sk_abcd******");
        assert_eq!(
            mask_api_key("sk_abcdef1234", false),
            format!("sk_abcd{}", "*".repeat("sk_abcdef1234".len() - 7))
        );
    }

    #[test]
    fn test_mask_empty_key_stays_empty() {
        assert_eq!(mask_api_key("", false), "");
        assert_eq!(mask_api_key("", true), "");
    }

    #[test]
    fn test_visible_key_is_returned_unchanged() {
        for key in ["sk_abcdef1234", "short", "sk-proj-0123456789abcdef", "ключ-ключ-ключ"] {
            assert_eq!(mask_api_key(key, true), key);
        }
    }

    #[test]
    fn test_short_keys_are_not_masked() {
        assert_eq!(mask_api_key("sk_abc", false), "sk_abc");
        assert_eq!(mask_api_key("sk_abcd", false), "sk_abcd");
        assert_eq!(mask_api_key("sk_abcde", false), "sk_abcd*");
    }

    #[test]
    fn test_mask_preserves_character_count_for_multibyte_keys() {
        let key = "ключ-ключ-ключ";
        let masked = mask_api_key(key, false);

        assert_eq!(masked.chars().count(), key.chars().count());
        assert!(masked.starts_with("ключ-кл"));
    }

    #[test]
    fn test_custom_prefix_and_mask_char() {
        assert_eq!(mask_api_key_with("abcdef", false, 2, '•'), "ab••••");
        assert_eq!(mask_api_key_with("abcdef", false, 0, '#'), "######");
    }

    #[test]
    fn test_reconcile_unchanged_input_keeps_value() {
        let stored = "sk_abcdef1234";
        let displayed = mask_api_key(stored, false);

        assert_eq!(reconcile_masked_edit(stored, &displayed, &displayed), stored);
    }

    #[test]
    fn test_reconcile_edit_in_visible_prefix() {
        let stored = "sk_abcdef1234";
        let displayed = mask_api_key(stored, false);

        // Replace "abcd" with "ZZ" while the tail stays masked
        assert_eq!(
            reconcile_masked_edit(stored, &displayed, "sk_ZZ******"),
            "sk_ZZef1234"
        );
    }

    #[test]
    fn test_reconcile_select_all_and_paste() {
        let stored = "sk_abcdef1234";
        let displayed = mask_api_key(stored, false);

        assert_eq!(
            reconcile_masked_edit(stored, &displayed, "sk_newkey999"),
            "sk_newkey999"
        );
    }

    #[test]
    fn test_reconcile_clearing_the_input() {
        let stored = "sk_abcdef1234";
        let displayed = mask_api_key(stored, false);

        assert_eq!(reconcile_masked_edit(stored, &displayed, ""), "");
    }

    #[test]
    fn test_reconcile_first_keystroke_on_empty_key() {
        assert_eq!(reconcile_masked_edit("", "", "s"), "s");
    }

    #[test]
    fn test_reconcile_falls_back_when_display_is_stale() {
        assert_eq!(
            reconcile_masked_edit("sk_abcdef1234", "sk_abcd", "sk_abcdX"),
            "sk_abcdX"
        );
    }
}
