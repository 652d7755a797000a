use crate::error::AdapterError;
use crate::room::Adapter;
use meshcall_core::ClientId;
use std::collections::HashMap;

/// Room members that announced a nickname, keyed by client id.
///
/// A client without a nickname has not sent `ready` yet (or hung up), so no
/// one should try to connect to it.
pub async fn ready_clients(
    adapter: &dyn Adapter,
) -> Result<HashMap<ClientId, String>, AdapterError> {
    let clients = adapter.clients().await?;

    Ok(clients
        .into_iter()
        .filter(|(_, nickname)| !nickname.is_empty())
        .collect())
}
