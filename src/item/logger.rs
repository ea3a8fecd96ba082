use std::fmt::Debug;

use log::info;

use crate::core::item::ItemVisitor;

/// Logs every visited item at `info` level.
#[derive(Default)]
pub struct LoggerVisitor {}

impl<T> ItemVisitor<T> for LoggerVisitor
where
    T: Debug,
{
    fn visit(&self, item: &T) {
        info!("Record:{:?}", item);
    }
}
