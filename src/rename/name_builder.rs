/// Build the flattened texture filename from the extracted fields.
pub fn build_flat_name(item_type: &str, potion_type: &str) -> String {
    format!("minecraft__{}__{}.png", item_type, potion_type)
}
