use super::Serializer;

#[derive(Debug, Clone, Copy)]
pub(super) enum Flavor {
    Postgresql,
    Mysql,
}

impl Serializer {
    pub fn postgresql() -> Serializer {
        Serializer {
            flavor: Flavor::Postgresql,
        }
    }

    pub fn mysql() -> Serializer {
        Serializer {
            flavor: Flavor::Mysql,
        }
    }
}
