//! Global palette, contact details and the WhatsApp deep link.

// Midnight luxury palette
pub const SKY: &str = "#78bccf";
pub const LAVENDER: &str = "#c5bccf";
pub const BLUE: &str = "#7093cc";
pub const GOLD: &str = "#decd3f";
pub const BG: &str = "#020617";
pub const DARK_BG: &str = "#0f172a";
pub const CARD: &str = "#1e293b";
pub const TEXT: &str = "#f1f5f9";
/// Alternate section background (life insurance, testimonials).
pub const SECTION_BG: &str = "#0B1121";

pub const CONTACT_PHONE: &str = "+55 11 4318 3734";
pub const CONTACT_ADDRESS_1: &str =
    "Alameda Terracota, 215 - Salas 720 e 721, Espaço Cerâmica - São Caetano do Sul, SP.";
pub const CONTACT_ADDRESS_2: &str =
    "Alameda Terracota, 185 - Sala 716, Espaço Cerâmica - São Caetano do Sul, SP.";
pub const CONTACT_HOURS: &str = "Segunda à Sexta: 08:30 - 18:30";

const WHATSAPP_NUMBER: &str = "551143183734";
const WHATSAPP_GREETING: &str = "Olá! Vim pelo site e desejo uma consultoria exclusiva.";

/// Deep link used by every call-to-action. The greeting is percent-encoded;
/// the URL is only navigated to, never fetched.
pub fn whatsapp_link() -> String {
    format!(
        "https://wa.me/{}?text={}",
        WHATSAPP_NUMBER,
        urlencoding::encode(WHATSAPP_GREETING)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whatsapp_link_encodes_greeting() {
        let link = whatsapp_link();
        assert!(link.starts_with("https://wa.me/551143183734?text="));
        // "Olá!" -> accented char and '!' are escaped, spaces become %20
        assert!(link.contains("Ol%C3%A1%21"));
        assert!(link.contains("%20consultoria%20exclusiva."));
        assert!(!link.contains(' '));
    }
}
