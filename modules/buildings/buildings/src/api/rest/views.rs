//! HTML views.
//!
//! Handlers only decide *which* view to show; a [`ViewRenderer`] turns the
//! view and its notices into markup. [`HtmlViews`] is the built-in renderer.

use std::fmt::Write as _;

use buildings_sdk::models::{Building, BuildingFields};

use super::notice::Notice;
use crate::domain::fields::BuildingFormFields;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Index(Vec<Building>),
    CreateForm,
    Detail(Building),
    UpdateForm(Building),
}

pub trait ViewRenderer: Send + Sync {
    fn render(&self, view: &View, notices: &[Notice]) -> String;
}

/// Plain server-rendered pages with no external assets.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlViews;

impl ViewRenderer for HtmlViews {
    fn render(&self, view: &View, notices: &[Notice]) -> String {
        let (title, body) = match view {
            View::Index(buildings) => ("Buildings", index_body(buildings)),
            View::CreateForm => ("Add Building", form_body("/create", None, "Create")),
            View::Detail(building) => ("Building Details", detail_body(building)),
            View::UpdateForm(building) => (
                "Edit Building",
                form_body(&format!("/update/{}", building.id), Some(building), "Update"),
            ),
        };
        layout(title, notices, &body)
    }
}

fn layout(title: &str, notices: &[Notice], body: &str) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n<body>\n<h1>{title}</h1>\n"
    );
    for notice in notices {
        let _ = writeln!(
            html,
            "<div class=\"flash {}\">{}</div>",
            notice.kind().as_str(),
            escape(notice.message())
        );
    }
    html.push_str(body);
    html.push_str("</body>\n</html>\n");
    html
}

fn index_body(buildings: &[Building]) -> String {
    let mut html = String::from("<p><a href=\"/create\">Add Building</a></p>\n");
    if buildings.is_empty() {
        html.push_str("<p>No buildings found.</p>\n");
        return html;
    }
    html.push_str(
        "<table>\n<tr><th>Name</th><th>Address</th><th>Floors</th><th>Year Built</th><th>Building Code</th><th></th></tr>\n",
    );
    for b in buildings {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td><a href=\"/view/{id}\">View</a> <a href=\"/update/{id}\">Edit</a> \
             <a href=\"/delete/{id}\">Delete</a></td></tr>",
            escape(&b.name),
            escape(&b.address),
            b.floors,
            b.year_built,
            escape(&b.building_code),
            id = b.id,
        );
    }
    html.push_str("</table>\n");
    html
}

fn detail_body(b: &Building) -> String {
    let mut html = String::from("<dl>\n");
    for (label, value) in [
        ("Name", escape(&b.name)),
        ("Address", escape(&b.address)),
        ("Floors", b.floors.to_string()),
        ("Year Built", b.year_built.to_string()),
        ("Building Code", escape(&b.building_code)),
    ] {
        let _ = writeln!(html, "<dt>{label}</dt><dd>{value}</dd>");
    }
    let _ = write!(
        html,
        "</dl>\n<p><a href=\"/update/{id}\">Edit</a> <a href=\"/delete/{id}\">Delete</a> <a href=\"/\">Back</a></p>\n",
        id = b.id
    );
    html
}

fn form_body(action: &str, building: Option<&Building>, submit: &str) -> String {
    let values = building.map(BuildingFields::from_building);
    let value = |f: fn(BuildingFields) -> String| values.clone().map(f).unwrap_or_default();
    let fields = [
        ("Name", BuildingFormFields::NAME, "text", value(|v| v.name)),
        ("Address", BuildingFormFields::ADDRESS, "text", value(|v| v.address)),
        ("Floors", BuildingFormFields::FLOORS, "number", value(|v| v.floors)),
        ("Year Built", BuildingFormFields::YEAR_BUILT, "number", value(|v| v.year_built)),
        (
            "Building Code",
            BuildingFormFields::BUILDING_CODE,
            "text",
            value(|v| v.building_code),
        ),
    ];

    let mut html = String::new();
    let _ = writeln!(html, "<form method=\"post\" action=\"{}\">", escape(action));
    for (label, name, kind, value) in fields {
        let _ = writeln!(
            html,
            "<p><label for=\"{name}\">{label}</label> \
             <input type=\"{kind}\" id=\"{name}\" name=\"{name}\" value=\"{}\" required></p>",
            escape(&value)
        );
    }
    let _ = write!(
        html,
        "<p><button type=\"submit\">{submit}</button> <a href=\"/\">Cancel</a></p>\n</form>\n"
    );
    html
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
