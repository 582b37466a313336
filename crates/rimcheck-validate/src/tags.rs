use std::collections::HashSet;
use std::sync::OnceLock;

pub const METADATA_ROOT: &str = "ModMetaData";
pub const DEFS_ROOT: &str = "Defs";

/// Children that every About.xml must carry.
pub const REQUIRED_METADATA_TAGS: &[&str] = &["name", "author", "packageId", "supportedVersions"];

/// Definition types that are visible in-game and should carry a `label`.
pub const VISIBLE_DEF_TAGS: &[&str] = &["ThingDef", "RecipeDef", "ResearchProjectDef"];

/// Generic list/count markers exempt from unknown-tag reporting.
pub const EXEMPT_TAGS: &[&str] = &["li", "count"];

static RIMWORLD_TAGS: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// Known RimWorld XML vocabulary. Hand-maintained and necessarily
/// incomplete relative to the game's full modding API, so membership
/// here only drives advisory warnings.
pub fn rimworld_tags() -> &'static HashSet<&'static str> {
    RIMWORLD_TAGS.get_or_init(|| {
        [
            // roots and def types
            "ModMetaData",
            "Defs",
            "ThingDef",
            "RecipeDef",
            "ResearchProjectDef",
            "PawnKindDef",
            "TraitDef",
            "FactionDef",
            "BiomeDef",
            "JobDef",
            "WorkGiverDef",
            // mod metadata
            "name",
            "author",
            "packageId",
            "description",
            "supportedVersions",
            "modDependencies",
            "incompatibleWith",
            "loadAfter",
            "loadBefore",
            // ThingDef
            "defName",
            "label",
            "thingClass",
            "category",
            "tickerType",
            "altitudeLayer",
            "passability",
            "pathCost",
            "useHitPoints",
            "selectable",
            "drawGUIOverlay",
            "rotatable",
            "fillPercent",
            "statBases",
            "costList",
            "graphicData",
            "researchPrerequisites",
            "constructionSkillPrerequisite",
            "designationCategory",
            "placingDraggableDimensions",
            "terrainAffordanceNeeded",
            "constructEffect",
            "repairEffect",
            "filthLeaving",
            "leaveResourcesWhenKilled",
            "resourcesFractionWhenDeconstructed",
            // stats
            "MaxHitPoints",
            "WorkToBuild",
            "Flammability",
            "Beauty",
            "Mass",
            "MarketValue",
            "DeteriorationRate",
            "SellPriceFactor",
            "Comfort",
            "Nutrition",
            "FoodPoisonChance",
            // graphics
            "texPath",
            "graphicClass",
            "drawSize",
            "color",
            "colorTwo",
            "drawRotated",
            "allowFlip",
            "flipExtraRotation",
            "shadowData",
            "damageData",
            // recipes
            "jobString",
            "workSpeedStat",
            "workSkill",
            "effectWorking",
            "soundWorking",
            "workAmount",
            "unfinishedThingDef",
            "ingredients",
            "products",
            "recipeUsers",
            "researchPrerequisite",
            "skillRequirements",
            "workSkillLearnFactor",
            // research
            "baseCost",
            "techLevel",
            "prerequisites",
            "researchViewX",
            "researchViewY",
            "requiredResearchBuilding",
            "requiredResearchFacilities",
            "tab",
            // generic
            "li",
            "count",
            "filter",
            "thingDefs",
            "categories",
            "stuffCategories",
        ]
        .into_iter()
        .collect()
    })
}
