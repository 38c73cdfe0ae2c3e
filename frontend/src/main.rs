//! BlueGene Website Entry Point

use zoon::*;

mod about;
mod app;
mod contact;
mod content;
mod experts;
mod footer;
mod header;
mod hero;
mod section;
mod services;
mod technology;

pub fn main() {
    let site = content::site();

    // Content is static and trusted; a malformed catalog is a programming
    // error, so fail before mounting anything.
    if let Err(error) = site.validate() {
        panic!("invalid site content: {error}");
    }
    for anchor in site.unresolved_anchors() {
        zoon::println!("navigation target '{anchor}' has no matching section on this page");
    }

    start_app("app", app::root);
}
