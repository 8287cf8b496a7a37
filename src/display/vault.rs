//! Vault display formatting

use crate::models::Vault;
use crate::services::vault::RevealedItem;

/// Format a list of vaults
pub fn format_vault_list(vaults: &[Vault]) -> String {
    if vaults.is_empty() {
        return "No vaults found.\n".to_string();
    }

    let name_width = vaults.iter().map(|v| v.name.len()).max().unwrap_or(4).max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<10}  {}\n",
        "Name",
        "Category",
        "Description",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<10}  {:-<11}\n",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for vault in vaults {
        output.push_str(&format!(
            "{:<name_width$}  {:<10}  {}\n",
            vault.name,
            vault.category,
            vault.description,
            name_width = name_width,
        ));
    }

    output
}

/// Format a vault's items, optionally revealing decrypted passwords
///
/// With `show_passwords` off, stored secrets render as a masked marker.
pub fn format_item_list(items: &[RevealedItem], show_passwords: bool) -> String {
    if items.is_empty() {
        return "No items in this vault.\n".to_string();
    }

    let name_width = items
        .iter()
        .map(|i| i.item.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<20}  {:<16}  {}\n",
        "Name",
        "Username",
        "Password",
        "Link",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<20}  {:-<16}  {:-<10}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for revealed in items {
        let password = if !revealed.item.has_password() {
            String::new()
        } else if show_passwords {
            revealed.password.clone()
        } else {
            "********".to_string()
        };

        output.push_str(&format!(
            "{:<name_width$}  {:<20}  {:<16}  {}\n",
            revealed.item.name,
            revealed.item.username,
            password,
            revealed.item.link,
            name_width = name_width,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VaultItem;

    fn revealed(name: &str, password: &str) -> RevealedItem {
        let vault = Vault::new("Personal");
        let mut item = VaultItem::new(vault.id, name);
        if !password.is_empty() {
            item.set_envelope("00112233445566778899aabbccddeeff:cafe".to_string());
        }
        RevealedItem {
            item,
            password: password.to_string(),
        }
    }

    #[test]
    fn test_empty_lists() {
        assert_eq!(format_vault_list(&[]), "No vaults found.\n");
        assert_eq!(format_item_list(&[], false), "No items in this vault.\n");
    }

    #[test]
    fn test_passwords_masked_by_default() {
        let output = format_item_list(&[revealed("GitHub", "hunter2")], false);
        assert!(output.contains("********"));
        assert!(!output.contains("hunter2"));
    }

    #[test]
    fn test_passwords_shown_when_requested() {
        let output = format_item_list(&[revealed("GitHub", "hunter2")], true);
        assert!(output.contains("hunter2"));
    }

    #[test]
    fn test_no_password_renders_blank_not_mask() {
        let output = format_item_list(&[revealed("NoSecret", "")], false);
        assert!(!output.contains("********"));
    }
}
