mod profile;

pub use profile::{ContactCard, PaymentLink, Profile, SocialLink};
