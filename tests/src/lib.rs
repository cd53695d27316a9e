mod membership;
