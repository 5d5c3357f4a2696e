// Move type tags
//
// Parses type strings such as `0x2::coin::Coin<0x2::sui::SUI>` and renders
// them back in full-address or compressed (`0x2`) form. Addresses are held
// as bytes, so two spellings of the same type compare equal.

use core::fmt;
use core::iter::Peekable;
use core::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::address::SuiAddress;
use crate::error::{Result, TypeError};

#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeTag {
    Bool,
    U8,
    U16,
    U32,
    U64,
    U128,
    U256,
    Address,
    Signer,
    Vector(Box<TypeTag>),
    Struct(Box<StructTag>),
}

#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StructTag {
    pub address: SuiAddress,
    pub module: String,
    pub name: String,
    pub type_params: Vec<TypeTag>,
}

/// Whether `s` is a valid Move identifier.
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_') && s != "_"
}

impl StructTag {
    pub fn new(
        address: SuiAddress,
        module: impl Into<String>,
        name: impl Into<String>,
        type_params: Vec<TypeTag>,
    ) -> Result<Self> {
        let module = module.into();
        let name = name.into();
        for ident in [&module, &name] {
            if !is_valid_identifier(ident) {
                return Err(TypeError::InvalidIdentifier(ident.clone()));
            }
        }
        Ok(Self {
            address,
            module,
            name,
            type_params,
        })
    }

    /// `address::module::Name` without type parameters, full address form.
    pub fn type_name(&self) -> String {
        format!("{}::{}::{}", self.address, self.module, self.name)
    }

    /// `address::module::Name` without type parameters, compressed address.
    pub fn compressed_type_name(&self) -> String {
        format!("{}::{}::{}", self.address.short_str(), self.module, self.name)
    }

    pub fn to_compressed_string(&self) -> String {
        let mut out = self.compressed_type_name();
        if !self.type_params.is_empty() {
            let params: Vec<String> = self
                .type_params
                .iter()
                .map(TypeTag::to_compressed_string)
                .collect();
            out.push('<');
            out.push_str(&params.join(", "));
            out.push('>');
        }
        out
    }
}

impl TypeTag {
    pub fn to_compressed_string(&self) -> String {
        match self {
            TypeTag::Vector(inner) => format!("vector<{}>", inner.to_compressed_string()),
            TypeTag::Struct(tag) => tag.to_compressed_string(),
            primitive => primitive.to_string(),
        }
    }

    pub fn as_struct(&self) -> Option<&StructTag> {
        match self {
            TypeTag::Struct(tag) => Some(tag),
            _ => None,
        }
    }
}

impl From<StructTag> for TypeTag {
    fn from(tag: StructTag) -> Self {
        TypeTag::Struct(Box::new(tag))
    }
}

impl fmt::Display for StructTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())?;
        if let Some((first, rest)) = self.type_params.split_first() {
            write!(f, "<{}", first)?;
            for param in rest {
                write!(f, ", {}", param)?;
            }
            write!(f, ">")?;
        }
        Ok(())
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Bool => write!(f, "bool"),
            TypeTag::U8 => write!(f, "u8"),
            TypeTag::U16 => write!(f, "u16"),
            TypeTag::U32 => write!(f, "u32"),
            TypeTag::U64 => write!(f, "u64"),
            TypeTag::U128 => write!(f, "u128"),
            TypeTag::U256 => write!(f, "u256"),
            TypeTag::Address => write!(f, "address"),
            TypeTag::Signer => write!(f, "signer"),
            TypeTag::Vector(inner) => write!(f, "vector<{}>", inner),
            TypeTag::Struct(tag) => write!(f, "{}", tag),
        }
    }
}

impl fmt::Debug for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl fmt::Debug for StructTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

// ============================================================
// PARSER
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Name(String),
    Address(String),
    ColonColon,
    Lt,
    Gt,
    Comma,
    Eof,
}

fn tokenize(input: &str) -> core::result::Result<Vec<Token>, String> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            '<' => {
                chars.next();
                tokens.push(Token::Lt);
            }
            '>' => {
                chars.next();
                tokens.push(Token::Gt);
            }
            ',' => {
                chars.next();
                tokens.push(Token::Comma);
            }
            ':' => {
                chars.next();
                if chars.next() != Some(':') {
                    return Err("expected `::`".to_string());
                }
                tokens.push(Token::ColonColon);
            }
            c if c.is_ascii_whitespace() => {
                chars.next();
            }
            '0' => {
                let literal = take_while(&mut chars, |c| c.is_ascii_alphanumeric());
                if !(literal.starts_with("0x") || literal.starts_with("0X")) {
                    return Err(format!("unexpected literal `{}`", literal));
                }
                tokens.push(Token::Address(literal));
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let name = take_while(&mut chars, |c| c.is_ascii_alphanumeric() || c == '_');
                tokens.push(Token::Name(name));
            }
            other => return Err(format!("unexpected character `{}`", other)),
        }
    }

    tokens.push(Token::Eof);
    Ok(tokens)
}

fn take_while<I, F>(chars: &mut Peekable<I>, accept: F) -> String
where
    I: Iterator<Item = char>,
    F: Fn(char) -> bool,
{
    let mut out = String::new();
    while let Some(&c) = chars.peek() {
        if !accept(c) {
            break;
        }
        out.push(c);
        chars.next();
    }
    out
}

struct Parser {
    tokens: Peekable<std::vec::IntoIter<Token>>,
}

impl Parser {
    fn next(&mut self) -> core::result::Result<Token, String> {
        self.tokens
            .next()
            .ok_or_else(|| "unexpected end of input".to_string())
    }

    fn peek(&mut self) -> Option<&Token> {
        self.tokens.peek()
    }

    fn consume(&mut self, expected: Token) -> core::result::Result<(), String> {
        let got = self.next()?;
        if got != expected {
            return Err(format!("expected {:?}, got {:?}", expected, got));
        }
        Ok(())
    }

    fn name(&mut self) -> core::result::Result<String, String> {
        match self.next()? {
            Token::Name(name) => Ok(name),
            other => Err(format!("expected identifier, got {:?}", other)),
        }
    }

    fn type_params(&mut self) -> core::result::Result<Vec<TypeTag>, String> {
        if self.peek() != Some(&Token::Lt) {
            return Ok(Vec::new());
        }
        self.next()?;
        let mut params = vec![self.type_tag()?];
        while self.peek() == Some(&Token::Comma) {
            self.next()?;
            params.push(self.type_tag()?);
        }
        self.consume(Token::Gt)?;
        Ok(params)
    }

    fn struct_tag(&mut self, address: &str) -> core::result::Result<StructTag, String> {
        let address = SuiAddress::from_hex_literal(address).map_err(|e| e.to_string())?;
        self.consume(Token::ColonColon)?;
        let module = self.name()?;
        self.consume(Token::ColonColon)?;
        let name = self.name()?;
        let type_params = self.type_params()?;
        StructTag::new(address, module, name, type_params).map_err(|e| e.to_string())
    }

    fn type_tag(&mut self) -> core::result::Result<TypeTag, String> {
        Ok(match self.next()? {
            Token::Name(name) => match name.as_str() {
                "bool" => TypeTag::Bool,
                "u8" => TypeTag::U8,
                "u16" => TypeTag::U16,
                "u32" => TypeTag::U32,
                "u64" => TypeTag::U64,
                "u128" => TypeTag::U128,
                "u256" => TypeTag::U256,
                "address" => TypeTag::Address,
                "signer" => TypeTag::Signer,
                "vector" => {
                    self.consume(Token::Lt)?;
                    let inner = self.type_tag()?;
                    self.consume(Token::Gt)?;
                    TypeTag::Vector(Box::new(inner))
                }
                other => return Err(format!("unknown type `{}`", other)),
            },
            Token::Address(address) => TypeTag::Struct(Box::new(self.struct_tag(&address)?)),
            other => return Err(format!("unexpected token {:?}, expected type tag", other)),
        })
    }
}

fn parse<T, F>(input: &str, f: F) -> Result<T>
where
    F: FnOnce(&mut Parser) -> core::result::Result<T, String>,
{
    let invalid = |reason: String| TypeError::InvalidTypeTag {
        input: input.to_string(),
        reason,
    };
    let tokens = tokenize(input).map_err(invalid)?;
    let mut parser = Parser {
        tokens: tokens.into_iter().peekable(),
    };
    let value = f(&mut parser).map_err(invalid)?;
    parser.consume(Token::Eof).map_err(invalid)?;
    Ok(value)
}

impl FromStr for TypeTag {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s, |parser| parser.type_tag())
    }
}

impl FromStr for StructTag {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s, |parser| match parser.next()? {
            Token::Address(address) => parser.struct_tag(&address),
            other => Err(format!("expected struct address, got {:?}", other)),
        })
    }
}

/// Compressed form of a type string, e.g. `0x2::sui::SUI` for the
/// 64-digit spelling.
pub fn compress_type_str(type_str: &str) -> Result<String> {
    Ok(TypeTag::from_str(type_str)?.to_compressed_string())
}

// Type tags are strings in JSON and in transaction plans. Binary formats
// use the Move layout, whose variant order is fixed on chain.
#[derive(Serialize)]
#[serde(rename = "TypeTag")]
enum TypeTagRef<'a> {
    Bool,
    U8,
    U64,
    U128,
    Address,
    Signer,
    Vector(&'a TypeTag),
    Struct(&'a StructTag),
    U16,
    U32,
    U256,
}

#[derive(Deserialize)]
#[serde(rename = "TypeTag")]
enum TypeTagRepr {
    Bool,
    U8,
    U64,
    U128,
    Address,
    Signer,
    Vector(Box<TypeTag>),
    Struct(Box<StructTag>),
    U16,
    U32,
    U256,
}

#[derive(Serialize)]
#[serde(rename = "StructTag")]
struct StructTagRef<'a> {
    address: &'a SuiAddress,
    module: &'a str,
    name: &'a str,
    type_params: &'a [TypeTag],
}

#[derive(Deserialize)]
#[serde(rename = "StructTag")]
struct StructTagRepr {
    address: SuiAddress,
    module: String,
    name: String,
    type_params: Vec<TypeTag>,
}

impl Serialize for TypeTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            return serializer.collect_str(self);
        }
        let repr = match self {
            TypeTag::Bool => TypeTagRef::Bool,
            TypeTag::U8 => TypeTagRef::U8,
            TypeTag::U16 => TypeTagRef::U16,
            TypeTag::U32 => TypeTagRef::U32,
            TypeTag::U64 => TypeTagRef::U64,
            TypeTag::U128 => TypeTagRef::U128,
            TypeTag::U256 => TypeTagRef::U256,
            TypeTag::Address => TypeTagRef::Address,
            TypeTag::Signer => TypeTagRef::Signer,
            TypeTag::Vector(inner) => TypeTagRef::Vector(inner),
            TypeTag::Struct(tag) => TypeTagRef::Struct(tag),
        };
        repr.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TypeTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            return s.parse().map_err(de::Error::custom);
        }
        Ok(match TypeTagRepr::deserialize(deserializer)? {
            TypeTagRepr::Bool => TypeTag::Bool,
            TypeTagRepr::U8 => TypeTag::U8,
            TypeTagRepr::U16 => TypeTag::U16,
            TypeTagRepr::U32 => TypeTag::U32,
            TypeTagRepr::U64 => TypeTag::U64,
            TypeTagRepr::U128 => TypeTag::U128,
            TypeTagRepr::U256 => TypeTag::U256,
            TypeTagRepr::Address => TypeTag::Address,
            TypeTagRepr::Signer => TypeTag::Signer,
            TypeTagRepr::Vector(inner) => TypeTag::Vector(inner),
            TypeTagRepr::Struct(tag) => TypeTag::Struct(tag),
        })
    }
}

impl Serialize for StructTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            return serializer.collect_str(self);
        }
        StructTagRef {
            address: &self.address,
            module: &self.module,
            name: &self.name,
            type_params: &self.type_params,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for StructTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            return s.parse().map_err(de::Error::custom);
        }
        let repr = StructTagRepr::deserialize(deserializer)?;
        StructTag::new(repr.address, repr.module, repr.name, repr.type_params)
            .map_err(de::Error::custom)
    }
}
