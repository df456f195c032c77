use crate::commands::helpers::find_listing;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, ids: &[String], include_demo: bool) -> Result<CmdResult> {
    let listings = ids
        .iter()
        .map(|id| find_listing(store, id, include_demo))
        .collect::<Result<Vec<_>>>()?;
    Ok(CmdResult::default().with_listed_listings(listings))
}
