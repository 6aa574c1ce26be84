mod common;

#[cfg(test)]
mod test_move_builder;



#[cfg(test)]
mod test_power;


#[cfg(test)]
mod test_targeting;

#[cfg(test)]
mod test_multi_hit;


#[cfg(test)]
mod test_status_moves;

#[cfg(test)]
mod test_stat_moves;

#[cfg(test)]
mod test_damage_effects;




#[cfg(test)]
mod test_benefit_scores;

#[cfg(test)]
mod test_snapshot;
