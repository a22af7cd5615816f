use hwdesc_codec::{FieldValues, IllegalValue};
use hwdesc_reflect::{DescriptorSchema, FieldSpec, LegalValues};
use std::fmt::{self, Write};

pub fn dump_schema_list(out: &mut impl Write, schemas: &[&DescriptorSchema]) -> fmt::Result {
    for schema in schemas {
        writeln!(
            out,
            "{:<16} {} words, {} fields",
            schema.name,
            schema.num_words,
            schema.fields.len(),
        )?;
    }
    Ok(())
}

pub fn dump_layout(out: &mut impl Write, schema: &DescriptorSchema) -> fmt::Result {
    writeln!(out, "{} ({} words)", schema.name, schema.num_words)?;
    for word_index in 0..schema.num_words {
        for field in schema.fields_in_word(word_index) {
            writeln!(
                out,
                "    {} [{:>2}:{:>2}] {:<20} OFFSET 0x{:08x} LSB {:>2} MASK 0x{:08x}  {}",
                word_index,
                field.msb(),
                field.lsb(),
                field.name,
                field.byte_offset(),
                field.lsb(),
                field.mask(),
                describe_legal(field.legal),
            )?;
        }
    }
    Ok(())
}

pub fn dump_values(
    out: &mut impl Write,
    schema: &DescriptorSchema,
    values: &FieldValues,
) -> fmt::Result {
    writeln!(out, "{} {{", schema.name)?;
    for field in schema.fields {
        // Reserved fields are only interesting when something wrote to them.
        let value = values.get(field.name).copied().unwrap_or(0);
        if field.legal.is_reserved() && value == 0 {
            continue;
        }
        write!(
            out,
            "    (0x{:02x}) {}: {}",
            field.byte_offset(),
            field.name,
            value,
        )?;
        dump_value_suffix(out, field, value)?;
        writeln!(out)?;
    }
    writeln!(out, "}}")
}

fn dump_value_suffix(out: &mut impl Write, field: &FieldSpec, value: u32) -> fmt::Result {
    if value > 9 {
        write!(out, " (0x{:x})", value)?;
    }
    if let LegalValues::Enum(desc) = field.legal {
        match desc.name_of(value) {
            Some(name) => write!(out, " {}::{}", desc.name, name)?,
            None => write!(out, " (unknown {} value)", desc.name)?,
        }
    }
    Ok(())
}

pub fn dump_findings(out: &mut impl Write, findings: &[IllegalValue]) -> fmt::Result {
    for finding in findings {
        if finding.reserved {
            writeln!(out, "warning: reserved {}", finding)?;
        } else {
            writeln!(out, "warning: {}", finding)?;
        }
    }
    Ok(())
}

pub fn dump_words(out: &mut impl Write, words: &[u32]) -> fmt::Result {
    for (index, word) in words.iter().enumerate() {
        writeln!(out, "word[{}] = 0x{:08x}", index, word)?;
    }
    Ok(())
}

fn describe_legal(legal: LegalValues) -> String {
    match legal {
        LegalValues::All => "legal all".to_string(),
        LegalValues::Reserved => "reserved".to_string(),
        LegalValues::Only(values) => {
            let values: Vec<_> = values.iter().map(|value| value.to_string()).collect();
            format!("legal {}", values.join(", "))
        }
        LegalValues::Range { min, max } => format!("legal {}..={}", min, max),
        LegalValues::Enum(desc) => format!("enum {}", desc.name),
    }
}
