// Integration tests for the embedded translation catalog

use eb_core::catalog;
use eb_shared::Language;

#[test]
fn test_embedded_catalog_loads_and_verifies() {
    let catalog = catalog();
    assert!(catalog.verify().is_ok());
    // The canonical consolidated key set is substantial; a sudden shrink
    // means a namespace failed to make it into the embedded file.
    assert!(catalog.key_count() >= 190, "catalog lost keys: {}", catalog.key_count());
}

#[test]
fn test_every_canonical_key_resolves_in_both_languages() {
    let catalog = catalog();
    for key in [
        "navigation.home",
        "hero.title",
        "services.bookNow",
        "booking.totalAmount",
        "dashboard.welcome",
        "admin.dashboard",
        "auth.email",
        "common.loading",
        "footer.tagline",
        "currency.select",
    ] {
        for language in Language::ALL {
            let text = catalog.translate(language, key);
            assert_ne!(text, key, "{} unresolved under {}", key, language);
            assert!(!text.trim().is_empty(), "{} empty under {}", key, language);
        }
    }
}

#[test]
fn test_known_translations() {
    let catalog = catalog();
    assert_eq!(catalog.translate(Language::English, "navigation.home"), "Home");
    assert_eq!(catalog.translate(Language::Portuguese, "navigation.home"), "Início");
    assert_eq!(catalog.translate(Language::English, "common.loading"), "Loading...");
    assert_eq!(catalog.translate(Language::Portuguese, "common.loading"), "A carregar...");
    assert_eq!(
        catalog.translate(Language::Portuguese, "currency.aoa"),
        "Kwanza Angolano"
    );
}
