//! Standard structure element types and their PDF tag names.

/// The type of a structure element.
///
/// Covers the standard structure types of the PDF specification. Elements
/// whose type is not recognised carry [`StructureType::Invalid`] together
/// with the raw tag string on the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StructureType {
    /// Invalid or unrecognised structure element.
    Invalid,
    /// A complete document.
    Document,
    /// A large-scale division of a document.
    Part,
    /// A self-contained body of text.
    Article,
    /// A container for related content elements.
    Section,
    /// A generic element or block of elements.
    Division,
    /// Text attributed to someone other than the author of the surrounding text.
    BlockQuotation,
    /// Text describing a table or figure.
    Caption,
    /// A list of table-of-contents items or nested tables of contents.
    TableOfContents,
    /// An individual member of a table of contents.
    TableOfContentsItem,
    /// A sequence of entries containing identifying text and references.
    Index,
    /// A grouping that has no structural significance.
    NonStructuralElement,
    /// Content private to the producing application.
    PrivateElement,
    /// A logical document fragment.
    DocumentFragment,
    /// Content that is distinct from other content in the parent element.
    Aside,
    /// Title of the document or of a division of content.
    Title,
    /// A footnote or an endnote.
    FootOrEndNote,
    /// A sub-division of content.
    Subdivision,
    /// A paragraph.
    Paragraph,
    /// A heading.
    Heading,
    /// A level 1 heading.
    H1,
    /// A level 2 heading.
    H2,
    /// A level 3 heading.
    H3,
    /// A level 4 heading.
    H4,
    /// A level 5 heading.
    H5,
    /// A level 6 heading.
    H6,
    /// A sequence of items.
    List,
    /// A list item.
    ListItem,
    /// A label for a list item.
    Label,
    /// The description of a list item.
    ListBody,
    /// A table.
    Table,
    /// A table row.
    TableRow,
    /// A table cell containing a header.
    TableHeaderCell,
    /// A table cell containing data.
    TableDataCell,
    /// A group of rows constituting the table's header.
    TableHeaderRowGroup,
    /// A group of rows constituting the table's body.
    TableBodyRowGroup,
    /// A group of rows constituting the table's footer.
    TableFooterRowGroup,
    /// A portion of text.
    Span,
    /// An inline quotation.
    Quote,
    /// An item of explanatory text.
    Note,
    /// A citation to content elsewhere in the document.
    Reference,
    /// A reference identifying the external source of cited content.
    BibEntry,
    /// A fragment of computer code.
    Code,
    /// An association between a structure element and a link annotation.
    Link,
    /// An association between a structure element and an annotation.
    Annotation,
    /// Emphasised content.
    Emphasis,
    /// Content of strong importance.
    Strong,
    /// A ruby side note.
    Ruby,
    /// The text to which a ruby annotation is applied.
    RubyBaseText,
    /// The smaller-size text placed adjacent to the ruby base text.
    RubyAnnotationText,
    /// Punctuation surrounding the ruby annotation text.
    RubyPunctuation,
    /// A warichu comment following the text to which it refers.
    Warichu,
    /// The text of a warichu element.
    WarichuText,
    /// The punctuation that surrounds the warichu text.
    WarichuPunctuation,
    /// A figure.
    Figure,
    /// A mathematical formula.
    Formula,
    /// An interactive form field.
    Form,
    /// Content that is not part of the document's real content.
    Artifact,
}

impl StructureType {
    /// The standard PDF structure tag for this type, or `None` for
    /// [`StructureType::Invalid`].
    pub fn tag_name(&self) -> Option<&'static str> {
        use StructureType::*;
        Some(match self {
            Invalid => return None,
            Document => "Document",
            Part => "Part",
            Article => "Art",
            Section => "Sect",
            Division => "Div",
            BlockQuotation => "BlockQuote",
            Caption => "Caption",
            TableOfContents => "TOC",
            TableOfContentsItem => "TOCI",
            Index => "Index",
            NonStructuralElement => "NonStruct",
            PrivateElement => "Private",
            DocumentFragment => "DocumentFragment",
            Aside => "Aside",
            Title => "Title",
            FootOrEndNote => "FENote",
            Subdivision => "Sub",
            Paragraph => "P",
            Heading => "H",
            H1 => "H1",
            H2 => "H2",
            H3 => "H3",
            H4 => "H4",
            H5 => "H5",
            H6 => "H6",
            List => "L",
            ListItem => "LI",
            Label => "Lbl",
            ListBody => "LBody",
            Table => "Table",
            TableRow => "TR",
            TableHeaderCell => "TH",
            TableDataCell => "TD",
            TableHeaderRowGroup => "THead",
            TableBodyRowGroup => "TBody",
            TableFooterRowGroup => "TFoot",
            Span => "Span",
            Quote => "Quote",
            Note => "Note",
            Reference => "Reference",
            BibEntry => "BibEntry",
            Code => "Code",
            Link => "Link",
            Annotation => "Annot",
            Emphasis => "Em",
            Strong => "Strong",
            Ruby => "Ruby",
            RubyBaseText => "RB",
            RubyAnnotationText => "RT",
            RubyPunctuation => "RP",
            Warichu => "Warichu",
            WarichuText => "WT",
            WarichuPunctuation => "WP",
            Figure => "Figure",
            Formula => "Formula",
            Form => "Form",
            Artifact => "Artifact",
        })
    }

    /// Parse a standard PDF structure tag. Returns `None` for tags that are
    /// not standard structure types.
    pub fn from_tag(tag: &str) -> Option<StructureType> {
        use StructureType::*;
        Some(match tag {
            "Document" => Document,
            "Part" => Part,
            "Art" => Article,
            "Sect" => Section,
            "Div" => Division,
            "BlockQuote" => BlockQuotation,
            "Caption" => Caption,
            "TOC" => TableOfContents,
            "TOCI" => TableOfContentsItem,
            "Index" => Index,
            "NonStruct" => NonStructuralElement,
            "Private" => PrivateElement,
            "DocumentFragment" => DocumentFragment,
            "Aside" => Aside,
            "Title" => Title,
            "FENote" => FootOrEndNote,
            "Sub" => Subdivision,
            "P" => Paragraph,
            "H" => Heading,
            "H1" => H1,
            "H2" => H2,
            "H3" => H3,
            "H4" => H4,
            "H5" => H5,
            "H6" => H6,
            "L" => List,
            "LI" => ListItem,
            "Lbl" => Label,
            "LBody" => ListBody,
            "Table" => Table,
            "TR" => TableRow,
            "TH" => TableHeaderCell,
            "TD" => TableDataCell,
            "THead" => TableHeaderRowGroup,
            "TBody" => TableBodyRowGroup,
            "TFoot" => TableFooterRowGroup,
            "Span" => Span,
            "Quote" => Quote,
            "Note" => Note,
            "Reference" => Reference,
            "BibEntry" => BibEntry,
            "Code" => Code,
            "Link" => Link,
            "Annot" => Annotation,
            "Em" => Emphasis,
            "Strong" => Strong,
            "Ruby" => Ruby,
            "RB" => RubyBaseText,
            "RT" => RubyAnnotationText,
            "RP" => RubyPunctuation,
            "Warichu" => Warichu,
            "WT" => WarichuText,
            "WP" => WarichuPunctuation,
            "Figure" => Figure,
            "Formula" => Formula,
            "Form" => Form,
            "Artifact" => Artifact,
            _ => return None,
        })
    }

    /// All standard structure types, excluding [`StructureType::Invalid`].
    pub const STANDARD: [StructureType; 57] = {
        use StructureType::*;
        [
            Document,
            Part,
            Article,
            Section,
            Division,
            BlockQuotation,
            Caption,
            TableOfContents,
            TableOfContentsItem,
            Index,
            NonStructuralElement,
            PrivateElement,
            DocumentFragment,
            Aside,
            Title,
            FootOrEndNote,
            Subdivision,
            Paragraph,
            Heading,
            H1,
            H2,
            H3,
            H4,
            H5,
            H6,
            List,
            ListItem,
            Label,
            ListBody,
            Table,
            TableRow,
            TableHeaderCell,
            TableDataCell,
            TableHeaderRowGroup,
            TableBodyRowGroup,
            TableFooterRowGroup,
            Span,
            Quote,
            Note,
            Reference,
            BibEntry,
            Code,
            Link,
            Annotation,
            Emphasis,
            Strong,
            Ruby,
            RubyBaseText,
            RubyAnnotationText,
            RubyPunctuation,
            Warichu,
            WarichuText,
            WarichuPunctuation,
            Figure,
            Formula,
            Form,
            Artifact,
        ]
    };
}
