use mysql_async::Value as MyValue;

/// A value read over the text protocol, reduced to its textual form.
#[derive(Debug)]
pub struct Value(MyValue);

impl From<MyValue> for Value {
    fn from(value: MyValue) -> Self {
        Self(value)
    }
}

impl Value {
    pub fn into_cell(self) -> Option<String> {
        match self.0 {
            MyValue::NULL => None,
            MyValue::Bytes(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
            MyValue::Int(value) => Some(value.to_string()),
            MyValue::UInt(value) => Some(value.to_string()),
            MyValue::Float(value) => Some(value.to_string()),
            MyValue::Double(value) => Some(value.to_string()),
            value => Some(value.as_sql(true).trim_matches('\'').to_string()),
        }
    }
}
