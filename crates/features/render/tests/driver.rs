use plzmap_domain::config::{FeatureConfig, Stroke, StyleConfig};
use plzmap_domain::{Color, DisplayMode, PostalCode};
use plzmap_render::{FeatureCollection, FeatureKey, RecordingSurface, RenderDriver, SvgSurface};
use plzmap_zones::{Document, MemorySource, ReferenceData, ReferenceStore};
use std::sync::Arc;

const PLZ_TO_ZONE: &str = r#"{ "2020": "A", "2000": "B", "1010": "C" }"#;

const ZONES: &str = r##"{
    "zones": {
        "A": { "name": "Nord", "color": "#ff0000", "gebiet": "G1" },
        "B": { "name": "Süd", "color": "#0000ff", "gebiet": "G9" },
        "C": { "name": "Wien", "color": "#ff00ff", "gebiet": "G1" }
    },
    "gebiet": { "G1": { "name": "Nord-Ost", "color": "#00ff00" } }
}"##;

const AREAS: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        { "properties": { "plz": "2020" },
          "geometry": { "type": "Polygon", "coordinates": [[[16.0, 48.5], [16.2, 48.5], [16.2, 48.7], [16.0, 48.5]]] } },
        { "id": "plz-2000",
          "geometry": { "type": "Polygon", "coordinates": [[[16.3, 48.0], [16.5, 48.0], [16.5, 48.2], [16.3, 48.0]]] } },
        { "properties": { "plz": "9999" },
          "geometry": { "type": "Polygon", "coordinates": [[[14.0, 47.0], [14.2, 47.0], [14.2, 47.2], [14.0, 47.0]]] } },
        { "properties": { "plz": "9998, 1010/2020" },
          "geometry": { "type": "Polygon", "coordinates": [[[16.3, 48.2], [16.4, 48.2], [16.4, 48.3], [16.3, 48.2]]] } },
        { "properties": { "name": "Bodensee" },
          "geometry": { "type": "Polygon", "coordinates": [[[9.5, 47.5], [9.7, 47.5], [9.7, 47.6], [9.5, 47.5]]] } }
    ]
}"#;

async fn data() -> Arc<ReferenceData> {
    let source = MemorySource::new().with(Document::PlzToZone, PLZ_TO_ZONE).with(Document::Zones, ZONES);
    let store = ReferenceStore::new(source);
    store.load().await.unwrap();
    store.snapshot().unwrap()
}

fn areas() -> FeatureCollection {
    FeatureCollection::from_slice(AREAS.as_bytes()).unwrap()
}

fn driver() -> RenderDriver {
    RenderDriver::new(StyleConfig::default(), FeatureConfig::default())
}

#[tokio::test]
async fn zone_pass_styles_every_feature() {
    let (data, areas) = (data().await, areas());
    let mut surface = RecordingSurface::new();

    let report = driver().render(&data, DisplayMode::Zone, &areas, &mut surface);
    assert_eq!(report.features, 5);
    assert_eq!(report.styled, 3);
    assert_eq!(report.fallback, 2);
    assert_eq!(report.without_postal_code, 1);
    assert_eq!(surface.style_calls(), 5);

    let first = surface.style(FeatureKey(0)).unwrap();
    assert_eq!(first.fill_color, Color::from("#ff0000"));
    assert_eq!(first.label.as_deref(), Some("Zone A: Nord"));
    assert_eq!(first.stroke, Stroke::default());
    assert_eq!(surface.popup(FeatureKey(0)), Some("Zone A: Nord"));

    let by_id = surface.style(FeatureKey(1)).unwrap();
    assert_eq!(by_id.label.as_deref(), Some("Zone B: Süd"));

    let unknown = surface.style(FeatureKey(2)).unwrap();
    assert_eq!(unknown.fill_color, Color::from("#ffffff"));
    assert_eq!(unknown.label, None);
    assert_eq!(surface.popup(FeatureKey(2)), None);

    assert_eq!(surface.legend().unwrap().title, "Zonen");
    assert_eq!(surface.legend().unwrap().len(), 3);
}

#[tokio::test]
async fn multi_code_area_uses_first_resolving_code() {
    let (data, areas) = (data().await, areas());
    let key = FeatureKey(3);
    let feature = areas.get(key).unwrap();

    let resolution = driver().resolve_feature(&data, DisplayMode::Zone, key, feature);
    assert_eq!(resolution.codes.len(), 3);
    assert_eq!(resolution.matched, Some(PostalCode::from("1010")));
    assert_eq!(resolution.attributes.label_text(), Some("Zone C: Wien"));
    assert_eq!(resolution.popup_text().as_deref(), Some("Zone C: Wien\nPLZ: 9998, 1010, 2020"));
}

#[tokio::test]
async fn switching_to_gebiet_mode_restyles_and_clears_popups() {
    let (data, areas) = (data().await, areas());
    let driver = driver();
    let mut surface = RecordingSurface::new();

    driver.render(&data, DisplayMode::Zone, &areas, &mut surface);
    let report = driver.render(&data, DisplayMode::Gebiet, &areas, &mut surface);

    assert_eq!(report.mode, DisplayMode::Gebiet);
    assert_eq!(surface.style(FeatureKey(0)).unwrap().fill_color, Color::from("#00ff00"));
    assert_eq!(surface.popup(FeatureKey(0)), Some("Nord-Ost"));

    // Zone B points at a Gebiet that does not exist.
    assert_eq!(surface.style(FeatureKey(1)).unwrap().fill_color, Color::from("#ffffff"));
    assert_eq!(surface.popup(FeatureKey(1)), None);
    assert_eq!(surface.legend().unwrap().title, "Liefergebiete NOS");
}

#[tokio::test]
async fn hover_toggles_outline_and_fills_info_box() {
    let (data, areas) = (data().await, areas());
    let driver = driver();
    let mut surface = RecordingSurface::new();
    let key = FeatureKey(0);
    let feature = areas.get(key).unwrap();

    driver.hover(&data, DisplayMode::Zone, key, feature, true, &mut surface);
    assert_eq!(surface.highlight_of(key), Some(&Stroke { color: Color::from("#000"), width: 2.0 }));
    assert_eq!(surface.info(), Some("PLZ: 2020\nZone: A - Nord\nLiefergebiet: Nord-Ost"));

    driver.hover(&data, DisplayMode::Zone, key, feature, false, &mut surface);
    assert_eq!(surface.highlight_of(key), Some(&Stroke::default()));

    let nameless = FeatureKey(4);
    driver.hover(&data, DisplayMode::Zone, nameless, areas.get(nameless).unwrap(), true, &mut surface);
    assert_eq!(surface.info(), Some("Keine Zoneninformation verfügbar"));
}

#[tokio::test]
async fn hover_describes_the_code_the_area_is_coloured_with() {
    let source = MemorySource::new()
        .with(Document::PlzToZone, r#"{ "3100": "C", "2020": "A", "2000": "B" }"#)
        .with(Document::Zones, ZONES.replace(r#""C": { "name": "Wien""#, r#""X": { "name": "Wien""#));
    let store = ReferenceStore::new(source);
    store.load().await.unwrap();
    let data = store.snapshot().unwrap();

    let areas = FeatureCollection::from_slice(
        br#"{ "type": "FeatureCollection", "features": [
            { "properties": { "plz": "3100,2020" }, "geometry": null },
            { "properties": { "plz": "2000,2020" }, "geometry": null }
        ] }"#,
    )
    .unwrap();
    let driver = driver();
    let mut surface = RecordingSurface::new();
    let (mixed, shared) = (FeatureKey(0), FeatureKey(1));

    // 3100 points at a zone missing from the table, so 2020 colours the area.
    driver.render(&data, DisplayMode::Zone, &areas, &mut surface);
    assert_eq!(surface.style(mixed).unwrap().label.as_deref(), Some("Zone A: Nord"));
    driver.hover(&data, DisplayMode::Zone, mixed, areas.get(mixed).unwrap(), true, &mut surface);
    assert_eq!(surface.info(), Some("PLZ: 2020\nZone: A - Nord\nLiefergebiet: Nord-Ost"));

    // Zone B has no Gebiet, so in Gebiet mode 2020 wins over 2000.
    driver.render(&data, DisplayMode::Gebiet, &areas, &mut surface);
    assert_eq!(surface.popup(shared), Some("Nord-Ost\nPLZ: 2000, 2020"));
    driver.hover(&data, DisplayMode::Gebiet, shared, areas.get(shared).unwrap(), true, &mut surface);
    assert_eq!(surface.info(), Some("PLZ: 2020\nZone: A - Nord\nLiefergebiet: Nord-Ost"));

    driver.hover(&data, DisplayMode::Zone, shared, areas.get(shared).unwrap(), true, &mut surface);
    assert_eq!(surface.info(), Some("PLZ: 2000\nZone: B - Süd\nLiefergebiet: unbekannt"));
}

#[tokio::test]
async fn svg_output_contains_every_area_and_the_legend() {
    let (data, areas) = (data().await, areas());
    let mut svg = SvgSurface::new(&areas, 480);

    driver().render(&data, DisplayMode::Gebiet, &areas, &mut svg);
    let document = svg.to_string();

    assert!(document.starts_with("<svg "));
    assert!(document.trim_end().ends_with("</svg>"));
    assert_eq!(document.matches("<path ").count(), 5);
    assert!(document.contains("<title>Nord-Ost</title>"));
    assert!(document.contains(">Liefergebiete NOS</text>"));
}
