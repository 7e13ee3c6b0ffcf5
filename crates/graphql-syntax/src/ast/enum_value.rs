use crate::ast::AstNode;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// Any bare name in value position other than `true`, `false` and `null`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnumValue {
    pub value: String,
    pub span: ByteSpan,
}

#[inherent]
impl AstNode for EnumValue {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
