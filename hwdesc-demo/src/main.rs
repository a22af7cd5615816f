use anyhow::{anyhow, bail, Context, Result};
use byteorder::LittleEndian;
use clap::{Parser, Subcommand};
use hwdesc_codec::{decode, encode, lint};
use hwdesc_reflect::DescriptorSchema;
use hwdesc_schemas::ALL_SCHEMAS;
use hwdesc_words::OwnedWords;

mod reflect_text;

/// Inspect hardware descriptors by name.
#[derive(Debug, Parser)]
#[command(name = "hwdesc-dump", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every declared descriptor.
    List,
    /// Print the bit layout and header constants of a descriptor.
    Layout { schema: String },
    /// Decode raw descriptor words into named fields.
    Decode {
        schema: String,
        /// Words in hex. With --bytes, a little-endian byte dump instead.
        #[arg(required = true)]
        words: Vec<String>,
        #[arg(long)]
        bytes: bool,
    },
    /// Encode `name=value` pairs into descriptor words.
    Encode {
        schema: String,
        fields: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut out = String::new();
    match cli.command {
        Command::List => reflect_text::dump_schema_list(&mut out, ALL_SCHEMAS)?,
        Command::Layout { schema } => reflect_text::dump_layout(&mut out, find_schema(&schema)?)?,
        Command::Decode {
            schema,
            words,
            bytes,
        } => {
            let schema = find_schema(&schema)?;
            let words = if bytes {
                parse_byte_dump(&words)?
            } else {
                parse_words(&words)?
            };
            let values = decode(schema, words.borrow())
                .with_context(|| format!("decoding {}", schema.name))?;
            reflect_text::dump_values(&mut out, schema, &values)?;
            reflect_text::dump_findings(&mut out, &lint(schema, words.borrow())?)?;
        }
        Command::Encode { schema, fields } => {
            let schema = find_schema(&schema)?;
            let pairs = fields
                .iter()
                .map(|arg| parse_assignment(arg))
                .collect::<Result<Vec<_>>>()?;
            let words = encode(schema, pairs)
                .with_context(|| format!("encoding {}", schema.name))?;
            reflect_text::dump_words(&mut out, &words.borrow())?;
        }
    }
    print!("{}", out);
    Ok(())
}

fn find_schema(name: &str) -> Result<&'static DescriptorSchema> {
    hwdesc_schemas::find(name).ok_or_else(|| {
        let known: Vec<_> = ALL_SCHEMAS.iter().map(|schema| schema.name).collect();
        anyhow!("unknown descriptor `{}` (known: {})", name, known.join(", "))
    })
}

fn parse_u32(s: &str) -> Result<u32> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.with_context(|| format!("invalid number `{}`", s))
}

/// Raw words are always hex, with or without a `0x` prefix.
fn parse_words(args: &[String]) -> Result<OwnedWords> {
    args.iter()
        .map(|arg| {
            let digits = arg
                .strip_prefix("0x")
                .or_else(|| arg.strip_prefix("0X"))
                .unwrap_or(arg.as_str());
            u32::from_str_radix(digits, 16).with_context(|| format!("invalid word `{}`", arg))
        })
        .collect::<Result<Vec<_>>>()
        .map(OwnedWords::from)
}

fn parse_byte_dump(args: &[String]) -> Result<OwnedWords> {
    let digits: String = args
        .iter()
        .flat_map(|arg| arg.chars())
        .filter(|c| !c.is_whitespace())
        .collect();
    if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        bail!("byte dump contains `{}`, which is not a hex digit", c);
    }
    if digits.len() % 2 != 0 {
        bail!("byte dump has an odd number of hex digits");
    }
    let bytes = digits
        .as_bytes()
        .chunks(2)
        .map(|pair| -> Result<u8> {
            // Only ASCII hex digits remain, so every pair is valid UTF-8.
            let pair = std::str::from_utf8(pair)?;
            u8::from_str_radix(pair, 16).with_context(|| format!("invalid byte `{}`", pair))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(OwnedWords::from_bytes::<LittleEndian>(&bytes)?)
}

fn parse_assignment(arg: &str) -> Result<(&str, u32)> {
    let mut parts = arg.splitn(2, '=');
    match (parts.next(), parts.next()) {
        (Some(name), Some(value)) if !name.is_empty() => Ok((name, parse_u32(value)?)),
        _ => bail!("expected `name=value`, got `{}`", arg),
    }
}
