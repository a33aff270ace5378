pub mod json;
pub mod terminal;

use crate::report::Section;

pub trait Reporter {
    fn report(&self, sections: &[&Section]) -> String;
}
