use odan_chainparams::{
    create_chain_params, AssumeUtxoData, Base58Prefixes, BlockSignal, ChainParams, Deployment,
    ErrorCode, NetworkConfig, ParamsError,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Deserialize)]
struct Request {
    op: String,

    #[serde(flatten)]
    network: NetworkConfig,

    #[serde(default)]
    height: u64,

    #[serde(default)]
    deployment: String,

    #[serde(default)]
    history: Vec<BlockSignal>,
}

#[derive(Default, Serialize)]
struct Response {
    ok: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    err: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    block_hash: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    merkle_root: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    header_hex: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    magic: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    port: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    base58_prefixes: Option<Base58Prefixes>,

    #[serde(skip_serializing_if = "Option::is_none")]
    bech32_hrp: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    dns_seeds: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    subsidy: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    active: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    found: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    assumeutxo: Option<AssumeUtxoData>,
}

fn err_code(code: ErrorCode) -> String {
    code.as_str().to_string()
}

fn failure(err: String) -> Response {
    Response {
        ok: false,
        err: Some(err),
        ..Response::default()
    }
}

fn success() -> Response {
    Response {
        ok: true,
        ..Response::default()
    }
}

fn run(req: &Request, params: &ChainParams) -> Result<Response, ParamsError> {
    match req.op.as_str() {
        "genesis" => {
            let genesis = params.genesis_block();
            Ok(Response {
                block_hash: Some(genesis.hash().to_hex()),
                merkle_root: Some(genesis.header.merkle_root.to_hex()),
                header_hex: Some(hex::encode(genesis.header.to_bytes())),
                ..success()
            })
        }
        "identity" => Ok(Response {
            magic: Some(hex::encode(params.message_start())),
            port: Some(params.default_port()),
            base58_prefixes: Some(*params.base58_prefixes()),
            bech32_hrp: Some(params.bech32_hrp().to_string()),
            dns_seeds: Some(params.seeds().dns_seeds.clone()),
            ..success()
        }),
        "subsidy" => Ok(Response {
            subsidy: Some(params.block_subsidy(req.height)),
            ..success()
        }),
        "deployment" => {
            let deployment: Deployment = req.deployment.parse()?;
            let state = match deployment {
                Deployment::Signaled(pos) => Some(
                    params
                        .consensus()
                        .deployment_state(pos, req.height, &req.history)?
                        .state
                        .as_str()
                        .to_string(),
                ),
                Deployment::Buried(_) => None,
            };
            Ok(Response {
                state,
                active: Some(params.is_active(deployment, req.height, &req.history)?),
                ..success()
            })
        }
        "checkpoint" => {
            let hash = params.checkpoint(req.height);
            Ok(Response {
                found: Some(hash.is_some()),
                block_hash: hash.map(|h| h.to_hex()),
                ..success()
            })
        }
        "assumeutxo" => {
            let anchor = params.assumeutxo_for_height(req.height).copied();
            Ok(Response {
                found: Some(anchor.is_some()),
                assumeutxo: anchor,
                ..success()
            })
        }
        _ => Ok(failure("unknown op".to_string())),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let req: Request = match serde_json::from_reader(std::io::stdin()) {
        Ok(v) => v,
        Err(e) => {
            let _ = serde_json::to_writer(std::io::stdout(), &failure(format!("bad request: {e}")));
            return;
        }
    };
    debug!(op = %req.op, chain = %req.network.chain, "request");

    let resp = match req
        .network
        .chain_options()
        .and_then(|opts| create_chain_params(req.network.chain, &opts))
        .and_then(|params| run(&req, &params))
    {
        Ok(resp) => resp,
        Err(e) => {
            debug!(error = %e, "request failed");
            failure(err_code(e.code))
        }
    };
    let _ = serde_json::to_writer(std::io::stdout(), &resp);
}
