use crate::model::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditField {
    #[default]
    Name,
    Email,
    Phone,
    City,
    Zipcode,
}

impl EditField {
    pub const ALL: [EditField; 5] = [
        EditField::Name,
        EditField::Email,
        EditField::Phone,
        EditField::City,
        EditField::Zipcode,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EditField::Name => "Name",
            EditField::Email => "Email",
            EditField::Phone => "Phone",
            EditField::City => "City",
            EditField::Zipcode => "Zip Code",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            EditField::Name => "Enter name",
            EditField::Email => "Enter email",
            EditField::Phone => "Enter phone number",
            EditField::City => "Enter city",
            EditField::Zipcode => "Enter zip code",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }

    pub fn value(self, user: &User) -> &str {
        match self {
            EditField::Name => &user.name,
            EditField::Email => &user.email,
            EditField::Phone => &user.phone,
            EditField::City => &user.address.city,
            EditField::Zipcode => &user.address.zipcode,
        }
    }

    /// City and zip code live in the nested address.
    pub fn value_mut(self, user: &mut User) -> &mut String {
        match self {
            EditField::Name => &mut user.name,
            EditField::Email => &mut user.email,
            EditField::Phone => &mut user.phone,
            EditField::City => &mut user.address.city,
            EditField::Zipcode => &mut user.address.zipcode,
        }
    }
}
