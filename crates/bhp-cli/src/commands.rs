//! Command execution
//!
//! Every command returns its output as a string so the binary only prints.

use crate::render;
use crate::settings::Settings;
use anyhow::{anyhow, bail, Context};
use bhp_client::{LocalPredictor, PredictionClient, PricePredictor};
use bhp_estimator::market::{self, Timeframe};
use bhp_estimator::{
    generate_history, ranked_by, EstimateBreakdown, HeuristicEstimator, MetricKind,
    PredictionRequest, PropertyType,
};
use clap::ArgMatches;
use serde_json::json;

fn arg<'a, T>(args: &'a ArgMatches, id: &str) -> anyhow::Result<&'a T>
where
    T: Clone + Send + Sync + 'static,
{
    args.get_one::<T>(id)
        .with_context(|| format!("missing argument {id}"))
}

fn to_json<T: serde::Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)? + "\n")
}

fn request_from(args: &ArgMatches) -> anyhow::Result<PredictionRequest> {
    let request = PredictionRequest::new(
        *arg::<f64>(args, "area")?,
        arg::<String>(args, "location")?,
        *arg::<u8>(args, "bedrooms")?,
        *arg::<u8>(args, "bathrooms")?,
    )?;

    Ok(match args.try_get_one::<PropertyType>("property-type") {
        Ok(Some(ty)) => request.with_property_type(*ty),
        _ => request,
    })
}

/// Run the subcommand in `matches`
///
/// # Errors
/// Returns error for invalid input or a failed remote call. Remote failures
/// carry the single user-facing message; details go to the log.
pub async fn run(matches: &ArgMatches, settings: &Settings) -> anyhow::Result<String> {
    match matches.subcommand() {
        Some(("estimate", args)) => estimate(args, settings).await,
        Some(("predict", args)) => predict(args, settings).await,
        Some(("locations", args)) => locations(args, settings).await,
        Some(("metadata", args)) => metadata(args, settings).await,
        Some(("metrics", args)) => metrics(args),
        Some(("market", args)) => market(args),
        Some(("compare", args)) => compare(args),
        Some((other, _)) => bail!("unknown command: {other}"),
        None => bail!("no command given"),
    }
}

fn client(settings: &Settings) -> anyhow::Result<PredictionClient> {
    Ok(PredictionClient::new(settings.api.clone())?)
}

/// Price a request through either predictor and render the result
async fn priced(
    predictor: &dyn PricePredictor,
    request: &PredictionRequest,
    args: &ArgMatches,
    breakdown: Option<EstimateBreakdown>,
) -> anyhow::Result<String> {
    let price = predictor.predict(request).await.map_err(|e| {
        tracing::error!(error = %e, predictor = predictor.name(), "prediction failed");
        anyhow!(e.user_message())
    })?;

    let history = args
        .get_one::<u8>("history")
        .map(|months| generate_history(price, usize::from(*months)))
        .unwrap_or_default();

    if args.get_flag("json") {
        return to_json(&json!({
            "source": predictor.name(),
            "price": price,
            "breakdown": breakdown,
            "history": history,
        }));
    }

    Ok(render::prediction(
        predictor.name(),
        price,
        breakdown.as_ref(),
        &history,
    ))
}

async fn estimate(args: &ArgMatches, settings: &Settings) -> anyhow::Result<String> {
    let request = request_from(args)?;
    let estimator = HeuristicEstimator::new(settings.weights.clone());
    let breakdown = args
        .get_flag("breakdown")
        .then(|| estimator.breakdown_request(&request));

    let model = arg::<String>(args, "model")?;
    let predictor = LocalPredictor::new(estimator).with_model(model.as_str());
    priced(&predictor, &request, args, breakdown).await
}

async fn predict(args: &ArgMatches, settings: &Settings) -> anyhow::Result<String> {
    let request = request_from(args)?;
    let client = client(settings)?;
    priced(&client, &request, args, None).await
}

async fn locations(args: &ArgMatches, settings: &Settings) -> anyhow::Result<String> {
    let locations = client(settings)?.list_locations().await;

    if args.get_flag("json") {
        return to_json(&locations);
    }
    Ok(locations.iter().map(|l| format!("{l}\n")).collect())
}

async fn metadata(args: &ArgMatches, settings: &Settings) -> anyhow::Result<String> {
    let metadata = client(settings)?.model_metadata().await.map_err(|e| {
        tracing::error!(error = %e, "model metadata request failed");
        anyhow!(e.user_message())
    })?;

    if args.get_flag("json") {
        return to_json(&metadata);
    }
    Ok(format!(
        "Model:    {}\nVersion:  {}\nTarget:   {}\nFeatures: {}\n",
        metadata.model_type,
        metadata.version,
        metadata.target,
        metadata.features.join(", ")
    ))
}

fn metrics(args: &ArgMatches) -> anyhow::Result<String> {
    let kind = *arg::<MetricKind>(args, "rank-by")?;
    let rows = ranked_by(kind);

    if args.get_flag("json") {
        return to_json(&rows);
    }
    Ok(render::metrics(&rows, kind))
}

fn market(args: &ArgMatches) -> anyhow::Result<String> {
    let timeframe = *arg::<Timeframe>(args, "timeframe")?;

    if args.get_flag("json") {
        return to_json(&json!({
            "timeframe": timeframe.as_str(),
            "areaPrices": market::AREA_PRICES,
            "priceTrend": market::price_trend(timeframe),
            "locationTrends": market::LOCATION_TRENDS,
            "propertyTypes": market::PROPERTY_TYPE_COUNTS,
            "areaDistribution": market::AREA_DISTRIBUTION,
            "propertyTypeShares": market::PROPERTY_TYPE_SHARES,
            "bhkDistribution": market::BHK_DISTRIBUTION,
            "bedroomPrices": market::BEDROOM_PRICES,
            "demandSupply": market::DEMAND_SUPPLY,
        }));
    }
    Ok(render::market_overview(timeframe))
}

fn compare(args: &ArgMatches) -> anyhow::Result<String> {
    let first = arg::<String>(args, "first")?;
    let second = arg::<String>(args, "second")?;
    let json = args.get_flag("json");

    if args.get_flag("property-types") {
        let cmp = market::compare_property_types(first.parse()?, second.parse()?);
        return if json {
            to_json(&cmp)
        } else {
            Ok(render::property_type_comparison(&cmp))
        };
    }

    let Some(cmp) = market::compare_locations(first, second) else {
        let known: Vec<_> = market::LOCATION_PROFILES.iter().map(|p| p.name).collect();
        bail!(
            "no profile for {first} or {second}; known localities: {}",
            known.join(", ")
        );
    };

    if json {
        to_json(&cmp)
    } else {
        Ok(render::location_comparison(&cmp))
    }
}
