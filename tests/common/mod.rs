//! Shared page fixtures for integration tests.
//!
//! Pages mimic the layout of Wikipedia high jump result articles: a short
//! infobox with medal icons, a long qualification table without badges, the
//! finals table and a navigation box.

#![allow(dead_code)]

pub const TITLE_1992: &str =
    "1992 World Junior Championships in Athletics \u{2013} Men's high jump - Wikipedia";

pub fn infobox() -> String {
    r#"<table class="infobox">
        <tbody>
        <tr><th colspan="2">Men's high jump</th></tr>
        <tr><th>Venue</th><td><a href="/wiki/Seoul">Seoul</a></td></tr>
        <tr><td><img alt="Gold medalist" src="g.png"></td><td><a href="/wiki/Steve_Smith">Steve Smith</a></td></tr>
        </tbody>
    </table>"#
        .to_string()
}

pub fn qualification_table(rows: usize) -> String {
    let mut html = String::from(
        r#"<table class="wikitable"><tbody><tr><th>Rank</th><th>Name</th><th>Result</th><th>Notes</th></tr>"#,
    );
    for i in 1..=rows {
        html.push_str(&format!(
            r#"<tr><td>{i}</td><td><a href="/wiki/Q{i}">Qualifier {i}</a></td><td><b>2.1{i}</b></td><td>q</td></tr>"#
        ));
    }
    html.push_str("</tbody></table>");
    html
}

/// Finals table with three medal rows, the given finalists and padding rows
/// up to `min_rows` body rows.
pub fn finals_table(finalists: &[(&str, &str, Option<&str>)], min_rows: usize) -> String {
    let mut rows = vec![
        r#"<tr><th>Rank</th><th>Name</th><th>Nationality</th><th>Result</th></tr>"#.to_string(),
        r#"<tr><td><img alt="Gold medalist" src="g.png"></td><td><a href="/wiki/Steve_Smith">Steve Smith</a></td><td><span class="flagicon"><a href="/wiki/GB"><img alt="United Kingdom" src="f.png"></a></span> United Kingdom</td><td><b>2.22</b></td></tr>"#.to_string(),
        r#"<tr><td><img alt="Silver medalist" src="s.png"></td><td><a href="/wiki/Tim_Forsyth">Tim Forsyth</a></td><td>Australia</td><td><b>2.20</b></td></tr>"#.to_string(),
        r#"<tr><td><img alt="Bronze medalist" src="b.png"></td><td><a href="/wiki/Lee_Jin-taek">Lee Jin-taek</a></td><td>South Korea</td><td><b>2.20</b></td></tr>"#.to_string(),
    ];
    for (rank, name, height) in finalists {
        let result = height.map_or_else(String::new, |h| format!("<b>{h}</b>"));
        rows.push(format!(
            r#"<tr><td>{rank}</td><td><a href="/wiki/{slug}">{name}</a></td><td>Somewhere</td><td>{result}</td></tr>"#,
            slug = name.replace(' ', "_"),
        ));
    }
    while rows.len() < min_rows {
        rows.push(r#"<tr><td colspan="4"></td></tr>"#.to_string());
    }
    format!(
        r#"<table class="wikitable sortable"><tbody>{}</tbody></table>"#,
        rows.join("\n")
    )
}

pub fn navbox() -> String {
    r#"<table class="navbox"><tbody><tr><td><a href="/wiki/1990">1990</a> <a href="/wiki/1994">1994</a></td></tr></tbody></table>"#
        .to_string()
}

pub fn page(title: &str, tables: &[String]) -> String {
    format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"UTF-8\"><title>{title}</title></head><body>\n<h1>{title}</h1>\n{}\n</body></html>",
        tables.join("\n<h2>Section</h2>\n")
    )
}

/// The canonical 1992 page: infobox, qualification, finals, navbox.
pub fn page_1992() -> String {
    page(
        TITLE_1992,
        &[
            infobox(),
            qualification_table(16),
            finals_table(
                &[("4", "Artur Partyka", Some("2.18")), ("5", "John Doe", None)],
                12,
            ),
            navbox(),
        ],
    )
}
