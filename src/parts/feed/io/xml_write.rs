use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::parts::feed::error::Result;
use crate::parts::feed::shop::{ShopFeed, ShopItem};

const INDENT_SIZE: usize = 2;

/// Writes the feed to `path`, replacing any existing file.
pub fn write_shop(path: &Path, shop: &ShopFeed) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    render_shop(&mut file, shop)?;
    file.flush()?;
    Ok(())
}

/// Streams the feed as indented UTF-8 XML into `sink`.
pub fn render_shop<W: Write>(sink: W, shop: &ShopFeed) -> Result<()> {
    let mut writer = Writer::new_with_indent(sink, b' ', INDENT_SIZE);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("SHOP")))?;

    for item in &shop.items {
        write_item(&mut writer, item)?;
    }

    writer.write_event(Event::End(BytesEnd::new("SHOP")))?;
    writer.get_mut().write_all(b"\n")?;
    Ok(())
}

fn write_item<W: Write>(writer: &mut Writer<W>, item: &ShopItem) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("SHOPITEM")))?;
    write_text_element(writer, "NAME", &item.name)?;
    write_text_element(writer, "CODE", &item.code)?;

    writer.write_event(Event::Start(BytesStart::new("CATEGORIES")))?;
    for category in &item.categories {
        write_text_element(writer, "CATEGORY", category)?;
    }
    writer.write_event(Event::End(BytesEnd::new("CATEGORIES")))?;

    write_text_element(writer, "PRICE_VAT", &item.price_vat)?;
    write_text_element(writer, "VAT", &item.vat)?;
    writer.write_event(Event::End(BytesEnd::new("SHOPITEM")))?;
    Ok(())
}

fn write_text_element<W: Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
