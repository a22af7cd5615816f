macro_rules! compile_descriptors {
    // Parse the end of input.
    (@parse Init /* empty */) => {};

    // Parse the start of an enum.
    (
        // Parse state.
        @parse Init

        // Item to parse.
        $(#[doc = $doc:literal])*
        enum $name:ident {
            $($body:tt)*
        }

        // Remainder of input.
        $($tail:tt)*
    ) => {
        compile_descriptors! {
            // We are now parsing an enum.
            @parse Enum { docs: [$($doc)*] name: $name entries: [] }
            { $($body)* }
            $($tail)*
        }
    };

    // Parse an enum entry.
    (
        // Parse state.
        @parse Enum { docs: $docs:tt name: $name:ident entries: [$($entry:tt)*] }

        // Item to parse.
        {
            $entry_name:ident = $entry_value:literal;
            $($body:tt)*
        }

        // Remainder of input.
        $($tail:tt)*
    ) => {
        compile_descriptors! {
            @parse Enum {
                docs: $docs
                name: $name
                entries: [
                    $($entry)*
                    // New entry.
                    { name: $entry_name value: $entry_value }
                ]
            }
            { $($body)* }
            $($tail)*
        }
    };

    // Parse the end of an enum.
    (
        // Parse state.
        @parse Enum {
            docs: [$($doc:literal)*]
            name: $name:ident
            entries: [$({ name: $entry_name:ident value: $entry_value:literal })*]
        }

        // Item to parse.
        { /* empty */ }

        // Remainder of input.
        $($tail:tt)*
    ) => {
        ::paste::paste! {
            // Generate the reflection table. Entries must be declared in ascending order.
            pub const [<$name:snake:upper _DESC>]: ::hwdesc_reflect::EnumDescriptor =
                ::hwdesc_reflect::EnumDescriptor {
                    name: stringify!($name),
                    values: &[$(
                        ($entry_value, stringify!($entry_name)),
                    )*],
                };

            // Generate the Rust type.

            $(#[doc = $doc])*
            #[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
            pub struct $name(pub u32);

            impl $name {
                $(
                    pub const $entry_name: $name = $name($entry_value);
                )*

                pub const fn to_u32(self) -> u32 {
                    self.0
                }

                /// The declared name of this value, if it has one.
                pub fn name(self) -> ::std::option::Option<&'static str> {
                    [<$name:snake:upper _DESC>].name_of(self.0)
                }
            }

            impl ::std::fmt::Debug for $name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    match self.name() {
                        Some(name) => write!(f, "{}::{}", stringify!($name), name),
                        None => write!(f, "{}(0x{:x})", stringify!($name), self.0),
                    }
                }
            }
        }

        compile_descriptors! { @parse Init $($tail)* }
    };

    // Parse the start of a descriptor.
    (
        // Parse state.
        @parse Init

        // Item to parse.
        $(#[doc = $doc:literal])*
        #[words($num_words:literal)]
        descriptor $schema:ident: $name:ident {
            $($body:tt)*
        }

        // Remainder of input.
        $($tail:tt)*
    ) => {
        compile_descriptors! {
            // We are now parsing a descriptor.
            @parse Descriptor {
                docs: [$($doc)*]
                schema: $schema
                name: $name
                num_words: $num_words
                fields: []
            }
            { $($body)* }
            $($tail)*
        }
    };

    // Parse a field with no documented restriction (`<legal all>`).
    (
        @parse Descriptor $state:tt
        {
            $field_name:ident @$word:literal [$msb:literal : $lsb:literal];
            $($body:tt)*
        }
        $($tail:tt)*
    ) => {
        compile_descriptors! {
            @push_field $state
            { name: $field_name word: $word msb: $msb lsb: $lsb legal: (all) }
            { $($body)* }
            $($tail)*
        }
    };

    // Parse a reserved field.
    (
        @parse Descriptor $state:tt
        {
            $field_name:ident @$word:literal [$msb:literal : $lsb:literal] reserved;
            $($body:tt)*
        }
        $($tail:tt)*
    ) => {
        compile_descriptors! {
            @push_field $state
            { name: $field_name word: $word msb: $msb lsb: $lsb legal: (reserved) }
            { $($body)* }
            $($tail)*
        }
    };

    // Parse a field with an explicit list of legal values.
    (
        @parse Descriptor $state:tt
        {
            $field_name:ident @$word:literal [$msb:literal : $lsb:literal]
                legal($($value:literal),+);
            $($body:tt)*
        }
        $($tail:tt)*
    ) => {
        compile_descriptors! {
            @push_field $state
            { name: $field_name word: $word msb: $msb lsb: $lsb legal: (only [$($value),+]) }
            { $($body)* }
            $($tail)*
        }
    };

    // Parse a field with an inclusive range of legal values.
    (
        @parse Descriptor $state:tt
        {
            $field_name:ident @$word:literal [$msb:literal : $lsb:literal]
                range($min:literal ..= $max:literal);
            $($body:tt)*
        }
        $($tail:tt)*
    ) => {
        compile_descriptors! {
            @push_field $state
            { name: $field_name word: $word msb: $msb lsb: $lsb legal: (range $min $max) }
            { $($body)* }
            $($tail)*
        }
    };

    // Parse a field whose legal values are the entries of an enum.
    (
        @parse Descriptor $state:tt
        {
            $field_name:ident @$word:literal [$msb:literal : $lsb:literal] enum $enum:ident;
            $($body:tt)*
        }
        $($tail:tt)*
    ) => {
        compile_descriptors! {
            @push_field $state
            { name: $field_name word: $word msb: $msb lsb: $lsb legal: (enum $enum) }
            { $($body)* }
            $($tail)*
        }
    };

    // Append a parsed field to the descriptor state.
    (
        @push_field {
            docs: $docs:tt
            schema: $schema:ident
            name: $name:ident
            num_words: $num_words:literal
            fields: [$($field:tt)*]
        }
        $new_field:tt
        { $($body:tt)* }
        $($tail:tt)*
    ) => {
        compile_descriptors! {
            @parse Descriptor {
                docs: $docs
                schema: $schema
                name: $name
                num_words: $num_words
                fields: [$($field)* $new_field]
            }
            { $($body)* }
            $($tail)*
        }
    };

    // Parse the end of a descriptor.
    (
        // Parse state.
        @parse Descriptor {
            docs: [$($doc:literal)*]
            schema: $schema:ident
            name: $name:ident
            num_words: $num_words:literal
            fields: [$({
                name: $field_name:ident
                word: $word:literal
                msb: $msb:literal
                lsb: $lsb:literal
                legal: $legal:tt
            })*]
        }

        // Item to parse.
        { /* empty */ }

        // Remainder of input.
        $($tail:tt)*
    ) => {
        ::paste::paste! {
            // Generate the reflection table.
            pub const [<$schema:upper _DESC>]: ::hwdesc_reflect::DescriptorSchema =
                ::hwdesc_reflect::DescriptorSchema {
                    name: stringify!($schema),
                    num_words: $num_words,
                    fields: &[$(
                        $name::[<$field_name:upper>],
                    )*],
                };

            // Generate the Rust type.

            $(#[doc = $doc])*
            #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
            pub struct $name(pub [u32; $num_words]);

            impl $name {
                pub const SCHEMA: &'static ::hwdesc_reflect::DescriptorSchema =
                    &[<$schema:upper _DESC>];

                $(
                    pub const [<$field_name:upper>]: ::hwdesc_reflect::FieldSpec =
                        ::hwdesc_reflect::FieldSpec {
                            name: stringify!($field_name),
                            word_index: $word,
                            bit_offset: $lsb,
                            bit_width: $msb - $lsb + 1,
                            legal: compile_descriptors!(@legal_values $legal),
                        };
                )*

                $(
                    pub fn $field_name(&self) -> u32 {
                        ::hwdesc_codec::extract_word(&Self::[<$field_name:upper>], self.0[$word])
                    }

                    pub fn [<set_ $field_name>](
                        &mut self,
                        value: u32,
                    ) -> ::std::result::Result<(), ::hwdesc_codec::CodecError> {
                        self.0[$word] = ::hwdesc_codec::insert_word(
                            &Self::[<$field_name:upper>],
                            self.0[$word],
                            value,
                        )?;
                        Ok(())
                    }
                )*

                pub fn words(&self) -> ::hwdesc_words::Words<'_> {
                    ::hwdesc_words::Words(&self.0)
                }
            }

            impl ::std::convert::From<$name> for ::hwdesc_words::OwnedWords {
                fn from(desc: $name) -> Self {
                    ::hwdesc_words::OwnedWords::from(desc.0.to_vec())
                }
            }

            impl<'a> ::std::convert::TryFrom<::hwdesc_words::Words<'a>> for $name {
                type Error = ::hwdesc_codec::CodecError;

                fn try_from(
                    words: ::hwdesc_words::Words<'a>,
                ) -> ::std::result::Result<Self, Self::Error> {
                    ::hwdesc_codec::check_len(Self::SCHEMA, words)?;
                    let mut data = [0; $num_words];
                    data.copy_from_slice(&words);
                    Ok(Self(data))
                }
            }
        }

        compile_descriptors! { @parse Init $($tail)* }
    };

    // Map parsed legal value clauses to `LegalValues` literals.
    (@legal_values (all)) => { ::hwdesc_reflect::LegalValues::All };
    (@legal_values (reserved)) => { ::hwdesc_reflect::LegalValues::Reserved };
    (@legal_values (only [$($value:literal),+])) => {
        ::hwdesc_reflect::LegalValues::Only(&[$($value),+])
    };
    (@legal_values (range $min:literal $max:literal)) => {
        ::hwdesc_reflect::LegalValues::Range { min: $min, max: $max }
    };
    (@legal_values (enum $enum:ident)) => {
        ::paste::paste! { ::hwdesc_reflect::LegalValues::Enum(&[<$enum:snake:upper _DESC>]) }
    };

    // Catch-all handler for input that didn't match anything.
    (@ $($args:tt)*) => {
        compile_error!(concat!(
            "a match fell through: @",
            $(stringify!($args), " ",)*
        ));
    };

    // Handle the initial invocation.
    ($($args:tt)*) => {
        compile_descriptors! {
            @parse Init
            $($args)*
        }
    };
}
