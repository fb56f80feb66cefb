use std::net::IpAddr;

use anyhow::Context;
use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing, Router,
};
use lopdf::{
    content::{Content, Operation},
    dictionary, Dictionary, Document, Object, Stream,
};
use tokio::net::TcpListener;
use tracing::info;

const OBJECT_ROUTE: &str = "/storage/v1/object/public/static/*path";
const FORM_NAME: &str = "Mitgliedsantrag_25-08.pdf";

/// The fillable fields of the sample membership form, in the order they
/// appear on the paper form.
pub const FORM_FIELDS: &[&str] = &[
    "membership_active",
    "membership_support",
    "name",
    "firstname",
    "birthday",
    "birthplace",
    "profession",
    "nationality",
    "street",
    "plz_town",
    "tel",
    "fax",
    "mobile",
    "email",
    "joindate_month",
    "joindate_year",
    "sepa_account_holder_name",
    "sepa_account_holder_firstname",
    "sepa_iban",
    "sepa_bic",
    "sepa_bank",
];

pub async fn start_server(host: IpAddr, port: u16) -> anyhow::Result<()> {
    info!("Starting storage testing server on {host}:{port}");
    info!("Membership form: http://{host}:{port}/storage/v1/object/public/static/{FORM_NAME}");

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router())
        .await
        .context("Failed to start HTTP server")
}

pub fn router() -> Router {
    Router::new().route(OBJECT_ROUTE, routing::get(object))
}

async fn object(Path(path): Path<String>) -> Response {
    if path != FORM_NAME {
        return (StatusCode::NOT_FOUND, "object not found").into_response();
    }
    (
        [(header::CONTENT_TYPE, "application/pdf")],
        sample_membership_form(),
    )
        .into_response()
}

/// A single page stand-in for the real membership application form, with the
/// same field names.
pub fn sample_membership_form() -> Vec<u8> {
    membership_form_with_fields(FORM_FIELDS)
}

/// Builds a one page form with a text widget for each of the given field
/// names.
pub fn membership_form_with_fields(names: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let page_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![Object::Name(b"F1".to_vec()), Object::Real(24.0)]),
            Operation::new("Td", vec![Object::Integer(100), Object::Integer(800)]),
            Operation::new("Tj", vec![Object::string_literal("Mitgliedsantrag")]),
            Operation::new("ET", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(Dictionary::new(), content.encode().unwrap()));

    let mut widget_ids = Vec::with_capacity(names.len());
    for (i, &name) in names.iter().enumerate() {
        let y = 760 - 20 * i as i64;
        let kind = if name.starts_with("membership_") {
            "Btn"
        } else {
            "Tx"
        };
        widget_ids.push(doc.add_object(dictionary! {
            "Type" => "Annot",
            "Subtype" => "Widget",
            "FT" => kind,
            "T" => Object::string_literal(name),
            "Rect" => vec![
                Object::Integer(150),
                Object::Integer(y),
                Object::Integer(400),
                Object::Integer(y + 16),
            ],
            "P" => page_id,
        }));
    }

    let annots = widget_ids
        .iter()
        .map(|&id| Object::Reference(id))
        .collect::<Vec<_>>();
    doc.objects.insert(
        page_id,
        Object::Dictionary(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(595),
                Object::Integer(842),
            ],
            "Resources" => resources_id,
            "Contents" => content_id,
            "Annots" => annots,
        }),
    );
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => 1,
        }),
    );

    let form_id = doc.add_object(dictionary! {
        "Fields" => widget_ids.into_iter().map(Object::Reference).collect::<Vec<_>>(),
    });
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
        "AcroForm" => form_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut out = Vec::new();
    doc.save_to(&mut out).unwrap();
    out
}
