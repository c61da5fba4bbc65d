
// Wrap std:: modules in namespace
#[allow(unused_imports)]
mod stdlib {

    pub use std::{
        cmp,
        fmt,
        hash,
        iter,
        marker,
        ops,
        result,
        string,
        vec,
    };

    pub use std::string::String;
    pub use std::vec::Vec;

    #[cfg(test)]
    pub use std::collections::hash_map::DefaultHasher;
}
