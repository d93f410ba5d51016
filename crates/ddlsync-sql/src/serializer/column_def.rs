use super::{DefaultValue, Ident, ToSql};

use crate::stmt::ColumnDef;

use ddlsync_core::schema::Constraint;

impl ToSql for &ColumnDef {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let name = Ident(&self.name);

        // Serial pseudo-types carry the auto increment on Postgres.
        let serial = f.serializer.is_postgresql() && self.is_auto_increment();
        let ty = if serial && self.ty.is_integer() {
            self.ty.to_serial()
        } else {
            self.ty.clone()
        };

        fmt!(f, name, " ", &ty);

        for constraint in &self.constraints {
            if serial && *constraint == Constraint::AutoIncrement {
                continue;
            }

            fmt!(f, " ", constraint.keyword());
        }

        if let Some(value) = &self.default {
            fmt!(f, " DEFAULT ", DefaultValue { value, ty: &self.ty });
        }
    }
}
