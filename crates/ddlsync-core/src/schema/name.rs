use heck::ToSnakeCase;

/// How model and field names become table and column names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Naming {
    /// Convert names to snake case.
    pub snake_case: bool,

    /// Prepended to every table name.
    pub table_prefix: String,
}

impl Naming {
    pub fn table_name(&self, model: &str) -> String {
        self.apply(&format!("{}{model}", self.table_prefix))
    }

    pub fn column_name(&self, field: &str) -> String {
        self.apply(field)
    }

    fn apply(&self, name: &str) -> String {
        if self.snake_case {
            name.to_snake_case()
        } else {
            name.to_string()
        }
    }
}

impl Default for Naming {
    fn default() -> Self {
        Naming {
            snake_case: true,
            table_prefix: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case() {
        let naming = Naming::default();

        assert_eq!(naming.column_name("UserName"), "user_name");
        assert_eq!(naming.column_name("APIKey"), "api_key");
        assert_eq!(naming.column_name("ID"), "id");
        assert_eq!(naming.column_name("created_at"), "created_at");
    }

    #[test]
    fn snake_case_drops_extra_underscores() {
        let naming = Naming::default();

        assert_eq!(naming.column_name("_private"), "private");
        assert_eq!(naming.column_name("created__at"), "created_at");
        assert_eq!(naming.column_name("Created_At"), "created_at");
        assert_eq!(naming.column_name("__"), "");
    }

    #[test]
    fn prefix_is_applied_before_snake_case() {
        let naming = Naming {
            table_prefix: "app_".to_string(),
            ..Naming::default()
        };

        assert_eq!(naming.table_name("BlogPost"), "app_blog_post");
    }

    #[test]
    fn verbatim() {
        let naming = Naming {
            snake_case: false,
            table_prefix: "App".to_string(),
        };

        assert_eq!(naming.table_name("User"), "AppUser");
        assert_eq!(naming.column_name("UserName"), "UserName");
    }
}
