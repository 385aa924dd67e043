//! File emission, theme symmetry and parameter loading.

use std::fs;
use std::io::ErrorKind;

use isomark_geometry::{Asset, Icon, Logo, Monogram, Wordmark};
use isomark_svg::{emit, load_params, render_to_string, variants, write_asset, EmitError, Theme};
use tempfile::tempdir;

const COLOR_ATTRIBUTES: [&str; 2] = ["fill", "stroke"];

/// Per element, the sorted `name="value"` pairs other than colors.
fn geometry_of(svg: &str) -> Vec<Vec<(String, String)>> {
    svg.split('<')
        .filter(|element| element.starts_with("polygon") || element.starts_with("line"))
        .map(|element| {
            let mut attributes: Vec<(String, String)> = element
                .split('"')
                .collect::<Vec<_>>()
                .chunks(2)
                .filter(|pair| pair.len() == 2)
                .map(|pair| {
                    let name = pair[0].trim().trim_start_matches("polygon").trim_start_matches("line");
                    (name.trim().trim_end_matches('=').to_string(), pair[1].to_string())
                })
                .filter(|(name, _)| !COLOR_ATTRIBUTES.contains(&name.as_str()))
                .collect();
            attributes.sort();
            attributes
        })
        .collect()
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn light_and_dark_share_geometry() {
    let light = render_to_string(&Icon::default(), &Theme::light());
    let dark = render_to_string(&Icon::default(), &Theme::dark());

    let geometry = geometry_of(&light);
    assert_eq!(geometry.len(), 16);
    assert_eq!(geometry, geometry_of(&dark));
    assert_ne!(light, dark);

    // Colors swap one for one.
    assert_eq!(count(&light, r#"fill="black""#), count(&dark, r#"fill="white""#));
    assert_eq!(count(&light, r#"stroke="black""#), count(&dark, r#"stroke="white""#));
    assert_eq!(count(&light, "#5A9EA3"), count(&dark, "#5A9EA3"));
}

#[test]
fn logo_themes_share_geometry() {
    let logo = Logo::default();
    let light = render_to_string(&logo, &Theme::light());
    let dark = render_to_string(&logo, &Theme::dark());
    assert_eq!(geometry_of(&light), geometry_of(&dark));
}

#[test]
fn rendering_is_repeatable() {
    let wordmark = Wordmark::default();
    let first = geometry_of(&render_to_string(&wordmark, &Theme::light()));
    let second = geometry_of(&render_to_string(&wordmark, &Theme::light()));
    assert_eq!(first, second);
}

#[test]
fn write_asset_creates_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cube.svg");
    write_asset(&Monogram::default(), &Theme::light(), &path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("<svg"));
    assert!(written.contains(r#"width="300""#));
    assert_eq!(count(&written, "<polygon"), 3);
}

#[test]
fn write_failure_is_plain_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("icon-light.svg");
    let err = write_asset(&Icon::default(), &Theme::light(), &path).unwrap_err();
    match err {
        EmitError::Io(e) => assert_eq!(e.kind(), ErrorKind::NotFound),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn emit_writes_variants() {
    let dir = tempdir().unwrap();
    let themes = [Theme::light(), Theme::dark()];

    let icons = emit(&Icon::default(), &themes, dir.path()).unwrap();
    let names: Vec<_> = icons
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["icon-light.svg", "icon-dark.svg"]);

    let wordmarks = emit(&Wordmark::default(), &themes, dir.path()).unwrap();
    assert_eq!(wordmarks, vec![dir.path().join("wordmark.svg")]);
    assert!(icons.iter().chain(&wordmarks).all(|p| p.exists()));
}

#[test]
fn unthemed_assets_use_only_the_first_theme() {
    let themes = [Theme::dark(), Theme::light()];
    assert_eq!(variants(&Icon::default(), &themes), &themes[..]);
    assert_eq!(variants(&Logo::default(), &themes).len(), 2);
    assert_eq!(variants(&Wordmark::default(), &themes), &[Theme::dark()][..]);
    assert_eq!(variants(&Monogram::default(), &themes), &[Theme::dark()][..]);
    assert!(variants(&Wordmark::default(), &[]).is_empty());
}

#[test]
fn emit_without_themes_writes_nothing() {
    let dir = tempdir().unwrap();
    let written = emit(&Wordmark::default(), &[], dir.path()).unwrap();
    assert!(written.is_empty());
}

#[test]
fn params_file_overrides_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("params.json");
    fs::write(&path, r#"{ "width": 60.0, "depth": 10.0 }"#).unwrap();

    let params = load_params(&path).unwrap();
    assert_eq!(params.width, 60.0);
    assert_eq!(params.depth, 10.0);
    assert_eq!(params.height, 70.0);

    let wider = Wordmark::new(params, Default::default()).size();
    assert!(wider.x > Wordmark::default().size().x);
}

#[test]
fn malformed_params_name_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ width: }").unwrap();

    let err = load_params(&path).unwrap_err();
    assert!(matches!(err, EmitError::Params { .. }));
    assert!(err.to_string().contains("bad.json"));
}

#[test]
fn missing_params_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = load_params(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, EmitError::Io(_)));
}
