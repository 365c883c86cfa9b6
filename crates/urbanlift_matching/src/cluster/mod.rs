pub mod cluster_group;
pub mod proximity_clusterer;
