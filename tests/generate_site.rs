//! End-to-end: scaffold a site, generate it, inspect the output

use std::fs;

use finsite::commands::{generate, init};
use finsite::generator::{Generator, Route};
use finsite::Site;
use tempfile::TempDir;

fn scaffolded() -> (TempDir, Site) {
    let dir = TempDir::new().unwrap();
    init::init_site(dir.path()).unwrap();
    let site = Site::new(dir.path()).unwrap();
    (dir, site)
}

fn read(dir: &TempDir, path: &str) -> String {
    fs::read_to_string(dir.path().join("public").join(path)).unwrap()
}

#[test]
fn generates_every_page() {
    let (dir, site) = scaffolded();
    generate::run(&site, None).unwrap();

    for page in [
        "index.html",
        "blog/index.html",
        "blog/post/your-first-paycheck/index.html",
        "blog/post/what-are-online-loans/index.html",
        "blog/category/finanzas-personales/index.html",
        "blog/category/prestamos/index.html",
        "credit-cards/index.html",
        "credit-cards/citi-double-cash/index.html",
        "css/site.css",
    ] {
        assert!(
            dir.path().join("public").join(page).is_file(),
            "missing {}",
            page
        );
    }

    let home = read(&dir, "index.html");
    assert!(home.contains("Bienvenidos a Top Finanzas"));
    assert!(home.contains("banner-section banner-section-desktop"));
    assert!(home.contains("febrero 25, 2025"));
    assert!(home.contains("721 vistas"));
    assert!(home.contains(r#"<html lang="es-mx">"#));

    let blog = read(&dir, "blog/index.html");
    let newest = blog.find("Tu primer sueldo").unwrap();
    let older = blog.find("¿Qué son los préstamos en línea?").unwrap();
    assert!(newest < older);

    let category = read(&dir, "blog/category/prestamos/index.html");
    assert!(category.contains("¿Qué son los préstamos en línea?"));
    assert!(!category.contains("Tu primer sueldo: Una guía completa para gestionarlo inteligentemente</h3>"));

    let card = read(&dir, "credit-cards/citi-double-cash/index.html");
    assert!(card.contains("Tarjeta de Crédito Citi Double Cash"));
    assert!(card.contains("Solicitar ahora"));
}

#[test]
fn footer_lists_only_filtered_navigation() {
    let (dir, site) = scaffolded();
    generate::run(&site, None).unwrap();

    let home = read(&dir, "index.html");
    let footer = &home[home.find("<footer").unwrap()..];
    let navigate = &footer[footer.find("footer-navigate").unwrap()..footer.find("footer-categories").unwrap()];

    assert!(navigate.contains(">Inicio</a>"));
    assert!(navigate.contains(">Blog</a>"));
    assert!(navigate.contains(">Tarjetas de crédito</a>"));
    assert!(!navigate.contains(">Nosotros</a>"));
    assert!(!navigate.contains(">Contacto</a>"));
}

#[test]
fn viewport_width_selects_banner_layout() {
    let (dir, site) = scaffolded();

    generate::run(&site, Some(767)).unwrap();
    assert!(read(&dir, "index.html").contains("banner-section banner-section-mobile"));

    generate::run(&site, Some(768)).unwrap();
    assert!(read(&dir, "index.html").contains("banner-section banner-section-desktop"));
}

#[test]
fn on_demand_render_matches_written_page() {
    let (dir, site) = scaffolded();
    generate::run(&site, None).unwrap();

    let generator = Generator::new(&site).unwrap();
    let route = Route::from_url_path("/credit-cards/citi-double-cash/").unwrap();
    let html = generator
        .render_route(&route, &generator.default_env())
        .unwrap();
    assert_eq!(html, read(&dir, "credit-cards/citi-double-cash/index.html"));
}

#[test]
fn broken_document_fails_only_its_pages() {
    let (dir, site) = scaffolded();
    fs::write(
        dir.path().join("content/credit-cards/citi-double-cash.content.json"),
        r#"{"metadata": {"title": "x", "description": "y"}}"#,
    )
    .unwrap();

    let err = generate::run(&site, None).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("/credit-cards/citi-double-cash/"));

    assert!(dir.path().join("public/index.html").is_file());
    assert!(dir.path().join("public/blog/index.html").is_file());
    assert!(!dir
        .path()
        .join("public/credit-cards/citi-double-cash/index.html")
        .exists());
}
