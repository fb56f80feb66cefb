use std::collections::{BTreeMap, HashMap};

use anyhow::{bail, Context};
use lopdf::{
    content::{Content, Operation},
    dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat,
};
use renegades_models::submission::MembershipApplication;
use renegades_pdf_contracts::MembershipPdfService;

const FORM_FONT_KEY: &[u8] = b"RnHelv";
const FONT_SIZE: f32 = 10.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct MembershipPdfServiceImpl;

impl MembershipPdfService for MembershipPdfServiceImpl {
    fn fill(
        &self,
        template: &[u8],
        application: &MembershipApplication,
    ) -> anyhow::Result<Vec<u8>> {
        let mut doc = Document::load_mem(template).context("Failed to parse the form template")?;
        let fields = form_fields(&doc)?;

        let mut stamps = BTreeMap::<ObjectId, Vec<Stamp>>::new();
        for (name, value) in field_values(application) {
            let &field_id = fields
                .get(name)
                .with_context(|| format!("Field {name:?} is missing from the form template"))?;
            if value.is_empty() {
                continue;
            }
            let (x, y) = field_rect(&doc, field_id)?;
            let page_id = field_page(&doc, field_id)?;
            stamps.entry(page_id).or_default().push(Stamp { value, x, y });
        }

        for (page_id, stamps) in stamps {
            apply_stamps(&mut doc, page_id, &stamps)?;
        }

        strip_form(&mut doc)?;

        let mut out = Vec::new();
        doc.save_to(&mut out)
            .context("Failed to serialize the filled form")?;
        Ok(out)
    }
}

/// The values to stamp, keyed by the field names of the paper form. The
/// checkbox fields are only part of the list when they are ticked.
fn field_values(application: &MembershipApplication) -> Vec<(&'static str, String)> {
    let mut values = Vec::new();
    if application.membership_active {
        values.push(("membership_active", "X".into()));
    }
    if application.membership_support {
        values.push(("membership_support", "X".into()));
    }
    values.push(("name", application.name.clone()));
    values.push(("firstname", application.firstname.clone()));
    values.push(("birthday", german_date(&application.birthday)));
    values.push(("birthplace", application.birthplace.clone()));
    values.push(("profession", application.profession.clone()));
    values.push(("nationality", application.nationality.clone()));
    values.push(("street", application.street.clone()));
    values.push(("plz_town", application.plz_town.clone()));
    values.push(("tel", application.tel.clone()));
    values.push(("fax", application.fax.clone()));
    values.push(("mobile", application.mobile.clone()));
    values.push(("email", application.email.clone()));
    values.push((
        "joindate_month",
        german_month(&application.joindate_month).into(),
    ));
    values.push(("joindate_year", last_two(&application.joindate_year).into()));
    values.push((
        "sepa_account_holder_name",
        application.sepa_account_holder_name.clone(),
    ));
    values.push((
        "sepa_account_holder_firstname",
        application.sepa_account_holder_firstname.clone(),
    ));
    values.push(("sepa_iban", application.sepa_iban.clone()));
    values.push(("sepa_bic", application.sepa_bic.clone()));
    values.push(("sepa_bank", application.sepa_bank.clone()));
    values
}

struct Stamp {
    value: String,
    x: f32,
    y: f32,
}

fn form_fields(doc: &Document) -> anyhow::Result<HashMap<String, ObjectId>> {
    let acro_form = doc
        .catalog()?
        .get(b"AcroForm")
        .context("The form template does not contain a form")?;
    let fields = resolve(doc, acro_form)?.as_dict()?.get(b"Fields")?;
    let fields = resolve(doc, fields)?.as_array()?;

    let mut out = HashMap::with_capacity(fields.len());
    for field in fields {
        let id = field.as_reference()?;
        let Ok(name) = doc.get_dictionary(id)?.get(b"T") else {
            continue;
        };
        if let Object::String(name, _) = name {
            out.insert(String::from_utf8_lossy(name).into_owned(), id);
        }
    }
    Ok(out)
}

/// Lower left corner of the widget rectangle of a field, in the coordinate
/// space of its page.
fn field_rect(doc: &Document, field_id: ObjectId) -> anyhow::Result<(f32, f32)> {
    let field = doc.get_dictionary(field_id)?;
    let rect = match field.get(b"Rect") {
        Ok(rect) => rect,
        // A field can keep its widget annotations in separate kid objects.
        Err(_) => {
            let kids = resolve(doc, field.get(b"Kids")?)?.as_array()?;
            let kid = kids
                .first()
                .context("A form field has neither a widget rectangle nor kids")?;
            resolve(doc, kid)?.as_dict()?.get(b"Rect")?
        }
    };

    let rect = resolve(doc, rect)?.as_array()?;
    let [x1, y1, x2, y2] = rect.as_slice() else {
        bail!("A form field has a malformed widget rectangle");
    };
    let (Some(x1), Some(y1), Some(x2), Some(y2)) =
        (number(x1), number(y1), number(x2), number(y2))
    else {
        bail!("A form field has a malformed widget rectangle");
    };
    Ok((x1.min(x2), y1.min(y2)))
}

/// The page a field belongs to. Fields usually carry a page reference, the
/// fallbacks cover forms built by more frugal editors.
fn field_page(doc: &Document, field_id: ObjectId) -> anyhow::Result<ObjectId> {
    let field = doc.get_dictionary(field_id)?;
    if let Ok(page_id) = field.get(b"P").and_then(Object::as_reference) {
        return Ok(page_id);
    }

    let pages = doc.get_pages();
    for &page_id in pages.values() {
        let page = doc.get_dictionary(page_id)?;
        let Ok(annots) = page.get(b"Annots") else {
            continue;
        };
        let Ok(annots) = resolve(doc, annots).and_then(Object::as_array) else {
            continue;
        };
        if annots
            .iter()
            .any(|annot| annot.as_reference().is_ok_and(|id| id == field_id))
        {
            return Ok(page_id);
        }
    }

    pages
        .into_values()
        .next()
        .context("The form template does not contain any pages")
}

fn apply_stamps(doc: &mut Document, page_id: ObjectId, stamps: &[Stamp]) -> anyhow::Result<()> {
    ensure_form_font(doc, page_id)?;

    let mut content = Content::decode(&doc.get_page_content(page_id)?)?;
    content.operations.push(Operation::new("q", vec![]));
    content.operations.push(Operation::new(
        "rg",
        vec![Object::Integer(0), Object::Integer(0), Object::Integer(0)],
    ));
    for stamp in stamps {
        content.operations.push(Operation::new("BT", vec![]));
        content.operations.push(Operation::new(
            "Tf",
            vec![Object::Name(FORM_FONT_KEY.to_vec()), Object::Real(FONT_SIZE)],
        ));
        // Just inside the lower left corner of the widget rectangle.
        content.operations.push(Operation::new(
            "Td",
            vec![Object::Real(stamp.x + 2.0), Object::Real(stamp.y + 2.0)],
        ));
        content.operations.push(Operation::new(
            "Tj",
            vec![Object::String(
                encode_latin1(&stamp.value),
                StringFormat::Literal,
            )],
        ));
        content.operations.push(Operation::new("ET", vec![]));
    }
    content.operations.push(Operation::new("Q", vec![]));

    let stream_id = doc.add_object(Stream::new(Dictionary::new(), content.encode()?));
    doc.get_object_mut(page_id)?
        .as_dict_mut()?
        .set("Contents", Object::Reference(stream_id));
    Ok(())
}

/// Registers a Helvetica font under a fixed key in the page resources.
/// Inherited resources are copied onto the page first so the change stays
/// local to it.
fn ensure_form_font(doc: &mut Document, page_id: ObjectId) -> anyhow::Result<()> {
    let page = doc.get_dictionary(page_id)?;
    let (resources_id, mut resources) = match page.get(b"Resources") {
        Ok(Object::Reference(id)) => (Some(*id), doc.get_dictionary(*id)?.clone()),
        Ok(object) => (None, object.as_dict()?.clone()),
        Err(_) => (None, inherited_resources(doc, page_id)?.unwrap_or_default()),
    };

    let mut font = match resources.get(b"Font") {
        Ok(Object::Reference(id)) => doc.get_dictionary(*id)?.clone(),
        Ok(object) => object.as_dict()?.clone(),
        Err(_) => Dictionary::new(),
    };

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    font.set(FORM_FONT_KEY, Object::Reference(font_id));
    resources.set("Font", Object::Dictionary(font));

    match resources_id {
        Some(id) => *doc.get_object_mut(id)? = Object::Dictionary(resources),
        None => {
            doc.get_object_mut(page_id)?
                .as_dict_mut()?
                .set("Resources", Object::Dictionary(resources));
        }
    }
    Ok(())
}

fn inherited_resources(doc: &Document, page_id: ObjectId) -> anyhow::Result<Option<Dictionary>> {
    let mut current = doc.get_dictionary(page_id)?;
    // Parent chains are short, the bound only guards against reference cycles.
    for _ in 0..32 {
        let Ok(parent) = current.get(b"Parent") else {
            return Ok(None);
        };
        current = doc.get_dictionary(parent.as_reference()?)?;
        match current.get(b"Resources") {
            Ok(Object::Reference(id)) => return Ok(Some(doc.get_dictionary(*id)?.clone())),
            Ok(object) => return Ok(Some(object.as_dict()?.clone())),
            Err(_) => {}
        }
    }
    Ok(None)
}

/// Removes the widget annotations and the form itself, leaving the stamped
/// text as regular page content.
fn strip_form(doc: &mut Document) -> anyhow::Result<()> {
    for page_id in doc.get_pages().into_values() {
        let page = doc.get_dictionary(page_id)?;
        let annots = match page.get(b"Annots") {
            Ok(annots) => resolve(doc, annots)?.as_array()?.clone(),
            Err(_) => continue,
        };
        let retained = annots
            .iter()
            .filter(|annot| !is_widget(doc, annot))
            .cloned()
            .collect::<Vec<_>>();

        let page = doc.get_object_mut(page_id)?.as_dict_mut()?;
        if retained.is_empty() {
            page.remove(b"Annots");
        } else {
            page.set("Annots", Object::Array(retained));
        }
    }

    let root_id = doc.trailer.get(b"Root")?.as_reference()?;
    doc.get_object_mut(root_id)?
        .as_dict_mut()?
        .remove(b"AcroForm");
    Ok(())
}

fn is_widget(doc: &Document, annot: &Object) -> bool {
    resolve(doc, annot)
        .ok()
        .and_then(|annot| annot.as_dict().ok())
        .and_then(|annot| annot.get(b"Subtype").ok())
        .and_then(|subtype| subtype.as_name().ok())
        .is_some_and(|name| name == b"Widget")
}

fn resolve<'a>(doc: &'a Document, object: &'a Object) -> lopdf::Result<&'a Object> {
    match object {
        Object::Reference(id) => doc.get_object(*id),
        other => Ok(other),
    }
}

fn number(object: &Object) -> Option<f32> {
    match *object {
        Object::Integer(value) => Some(value as f32),
        Object::Real(value) => Some(value),
        _ => None,
    }
}

/// Encodes text for a PDF string in the WinAnsi encoding declared on the
/// stamping font. Characters outside of it are replaced.
fn encode_latin1(value: &str) -> Vec<u8> {
    value
        .chars()
        .map(|c| if (c as u32) < 256 { c as u8 } else { b'?' })
        .collect()
}

fn german_date(date: &str) -> String {
    let mut parts = date.splitn(3, '-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day)) => format!("{day}.{month}.{year}"),
        _ => date.into(),
    }
}

fn german_month(month: &str) -> &'static str {
    match month {
        "01" => "Januar",
        "02" => "Februar",
        "03" => "März",
        "04" => "April",
        "05" => "Mai",
        "06" => "Juni",
        "07" => "Juli",
        "08" => "August",
        "09" => "September",
        "10" => "Oktober",
        "11" => "November",
        "12" => "Dezember",
        _ => "",
    }
}

fn last_two(year: &str) -> &str {
    match year.char_indices().nth_back(1) {
        Some((i, _)) => &year[i..],
        None => year,
    }
}
