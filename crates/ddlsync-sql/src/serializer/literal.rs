use super::{Formatter, ToSql};

use ddlsync_core::schema::Type;

/// A string literal, single quoted with embedded quotes doubled.
pub(super) struct Literal<S>(pub(super) S);

/// A column default, quoted when the column holds text.
pub(super) struct DefaultValue<'a> {
    pub(super) value: &'a str,
    pub(super) ty: &'a Type,
}

impl<S: AsRef<str>> ToSql for Literal<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push('\'');
        for c in self.0.as_ref().chars() {
            if c == '\'' {
                f.dst.push('\'');
            }
            f.dst.push(c);
        }
        f.dst.push('\'');
    }
}

impl ToSql for DefaultValue<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let quoted = self.value.len() >= 2
            && self.value.starts_with('\'')
            && self.value.ends_with('\'');

        if self.ty.is_textual() && !quoted {
            Literal(self.value).to_sql(f);
        } else {
            f.dst.push_str(self.value);
        }
    }
}
