pub mod badges;
pub mod github;
pub mod html;
pub mod owner;
pub mod portfolio;
pub mod stats;
