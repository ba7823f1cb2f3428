//! Top level application: one interactive session from login to exit

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::config::AppConfig;
use crate::console::{choose_transport, run_menu, show_transport_info, start_session, Console};
use crate::store::UserStore;
use crate::transit::TransitNetwork;

pub struct App {
    pub network: TransitNetwork,
    pub store: UserStore,
}

impl App {
    pub fn new(network: TransitNetwork, store: UserStore) -> Self {
        Self { network, store }
    }

    /// Build the default network and open the configured user store
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let network =
            TransitNetwork::create_default_network().context("Failed to build transit network")?;
        let store = UserStore::new(&config.users_file, config.corrupt_policy);
        Ok(Self::new(network, store))
    }

    /// Login (or register), pick a transport, then serve the menu until exit
    pub fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        let user = start_session(console, &self.store)?;
        let kind = choose_transport(console)?;
        show_transport_info(console, &self.network, kind)?;
        run_menu(console, &self.network, &user, kind)
    }
}
